// ── Progress reporting ──
//
// Orchestrators narrate what they are doing through a `Reporter` handed in
// by the caller. The CLI renders it to the terminal; tests record it.

use dnac_api::ApiResponse;

/// Sink for human-readable workflow output.
pub trait Reporter {
    /// Start of a workflow phase.
    fn divider(&mut self, title: &str);

    /// Something is about to happen.
    fn progress(&mut self, message: &str);

    fn success(&mut self, message: &str);

    fn failure(&mut self, message: &str);

    /// Report one controller response for `subject`.
    ///
    /// Success shows the body as-is; anything else shows it under a failure
    /// banner.
    fn api_result(&mut self, subject: &str, response: &ApiResponse) {
        if response.success {
            self.success(&format!("[{subject}] {}", response.body));
        } else {
            self.failure(&format!(
                "[{subject}] HTTP {}\n{}",
                response.status, response.body
            ));
        }
    }
}
