use howto_core::Result;

/// What a native share capability is asked to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Optional native share capability. When absent or failing, the
/// controller copies the page URL to the clipboard instead.
pub trait ShareTarget {
    fn share(&mut self, request: &ShareRequest) -> Result<()>;
}

/// How a share request was ultimately fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share target accepted the request.
    Shared,
    /// Fallback path: the page URL went to the clipboard.
    CopiedToClipboard,
}
