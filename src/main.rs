use clap::Parser;
use whatsapp_cloud_rust::resource::{
    ButtonParameter, ButtonSubKind, Component, Language, MediaReference, MediaSource,
    ParameterObject, Template, TemplateMessage,
};

/// Compose a template message and print the payload sent to the Cloud API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Recipient phone number.
    #[arg(long)]
    to: String,

    /// Name of the approved template.
    #[arg(long)]
    name: String,

    /// Template language code, e.g. en_US.
    #[arg(long, default_value = "en_US")]
    language: String,

    /// Public URL of an image shown in the header.
    #[arg(long)]
    header_image: Option<String>,

    /// Caption for the header image.
    #[arg(long, requires = "header_image")]
    header_caption: Option<String>,

    /// Body placeholder values, in order.
    #[arg(long = "body-text")]
    body_text: Vec<String>,

    /// Quick reply payloads, one button per value.
    #[arg(long = "quick-reply")]
    quick_reply: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let language = Language::new(cli.language)?;
    let mut template = Template::new(cli.name, language);

    if let Some(link) = cli.header_image {
        let mut image = MediaReference::image(MediaSource::link(link));
        if let Some(caption) = cli.header_caption {
            image = image.with_caption(caption);
        }
        template.add_component(Component::header().with_parameter(ParameterObject::from(image)));
    }

    if !cli.body_text.is_empty() {
        let mut body = Component::body();
        for text in cli.body_text {
            body.add_parameter(ParameterObject::text(text));
        }
        template.add_component(body);
    }

    for (index, payload) in cli.quick_reply.into_iter().enumerate() {
        let button = Component::button(ButtonSubKind::QuickReply, u32::try_from(index)?)
            .with_parameter(ButtonParameter::payload(payload));
        template.add_component(button);
    }

    let message = TemplateMessage::new(cli.to, template);
    println!("{}", serde_json::to_string_pretty(&message)?);
    Ok(())
}
