use log::debug;

use super::{ApiError, Client, HttpMethod, MessageResponse, Transport};
use crate::resource::TemplateMessage;

/// Messages endpoint.
pub struct Messages<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Messages<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a Client<T> {
        self.client
    }

    /// Send a template message from the phone number `sender_id`.
    pub fn send_template(
        &self,
        sender_id: &str,
        message: &TemplateMessage,
    ) -> Result<MessageResponse, ApiError> {
        debug!(
            "sending template `{}` ({}) to {}",
            message.template.name, message.template.language, message.to
        );
        let body = serde_json::to_value(message)?;
        let response = self.client.send_request(
            HttpMethod::Post,
            &format!("{sender_id}/messages"),
            Some(body),
        )?;

        let response = response
            .ok_or_else(|| ApiError::UnexpectedResponse("empty body from messages endpoint".into()))?;
        Ok(serde_json::from_value(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::mock::MockTransport;
    use crate::api::ApiConfiguration;
    use crate::resource::{Component, Language, ParameterObject, Template};
    use serde_json::json;

    fn message() -> TemplateMessage {
        let template = Template::new("hello_world", Language::new("en_US").unwrap())
            .with_component(Component::body().with_parameter(ParameterObject::text("Ana")));
        TemplateMessage::new("56789", template)
    }

    #[test]
    fn test_send_template() {
        let transport = MockTransport::default().respond_with(Ok(Some(json!({
            "messaging_product": "whatsapp",
            "contacts": [{ "input": "56789", "wa_id": "56789" }],
            "messages": [{ "id": "wamid.HBgLMTY1MDM4Nzk0MzkVAgARGBI3NjlBRTY4RjBCRkNFNzMwQTQA" }]
        }))));
        let client = Client::new(ApiConfiguration::default(), transport);

        let response = client.messages().send_template("123123", &message()).unwrap();
        assert_eq!(
            response.message_id(),
            Some("wamid.HBgLMTY1MDM4Nzk0MzkVAgARGBI3NjlBRTY4RjBCRkNFNzMwQTQA")
        );
        assert_eq!(response.contacts[0].wa_id, "56789");

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "https://graph.facebook.com/v19.0/123123/messages");
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(
            serde_json::to_string(body).unwrap(),
            serde_json::to_string(&message()).unwrap()
        );
    }

    #[test]
    fn test_empty_body_is_unexpected() {
        let client = Client::new(ApiConfiguration::default(), MockTransport::default());
        let err = client.messages().send_template("123123", &message()).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_malformed_body() {
        let transport = MockTransport::default().respond_with(Ok(Some(json!({ "contacts": 3 }))));
        let client = Client::new(ApiConfiguration::default(), transport);
        let err = client.messages().send_template("123123", &message()).unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
