#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsRecipient {
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsSendOptions {
    pub enable_delivery_report: bool,
}

/// Body of a send-SMS call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessage {
    pub from: String,
    pub message: String,
    pub sms_recipients: Vec<SmsRecipient>,
    pub sms_send_options: SmsSendOptions,
}

impl SmsMessage {
    pub fn new(from: impl Into<String>, to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            message: message.into(),
            sms_recipients: vec![SmsRecipient { to: to.into() }],
            sms_send_options: SmsSendOptions {
                enable_delivery_report: true,
            },
        }
    }

    pub fn add_recipient(mut self, to: impl Into<String>) -> Self {
        self.sms_recipients.push(SmsRecipient { to: to.into() });
        self
    }

    pub fn delivery_report(mut self, enable: bool) -> Self {
        self.sms_send_options.enable_delivery_report = enable;
        self
    }

    pub fn to_json(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
