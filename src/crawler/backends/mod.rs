// Concrete collaborators: yt-dlp for metadata, media and listings,
// Browserless as an alternative page renderer

pub mod browserless;
pub mod diagnostics;
pub mod ytdlp;

pub use browserless::RenderedPageDiscoverer;
pub use diagnostics::{diagnose_error, BlockingReason};
pub use ytdlp::{YtDlpDiscoverer, YtDlpDownloader, YtDlpResolver};
