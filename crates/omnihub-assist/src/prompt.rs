//! System instruction assembly

/// Build the system instruction for a request, embedding the current
/// device collection so the model answers about what the user actually
/// owns.
pub fn system_instruction(context: &str) -> String {
    format!(
        "You are the OmniControl Smart Assistant. You help users manage their \
         home devices and FM transmitter.\n\
         Available devices: {context}.\n\
         You can suggest \"scenes\" (e.g. \"Movie Night\" = TV ON, DStv ON, AC 22\u{b0}C).\n\
         You can suggest clear FM frequencies based on typical urban interference \
         (usually 88.3, 91.5, 107.9).\n\
         Keep responses concise and helpful."
    )
}
