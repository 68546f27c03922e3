#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Generate {
        request_id: crate::RequestId,
        payload: crate::RequestPayload,
    },
    WriteClipboard {
        kind: crate::ExportKind,
        text: String,
    },
    SaveMarkdown { filename: String, content: String },
    CheckHealth,
}
