/*!
 * Links to files on a hosted copy of the repository
 */

use tracing::warn;
use url::Url;

/// Branch used in blob links when none is given
pub const DEFAULT_BRANCH: &str = "main";

/// Builds `<base>/-/blob/<branch>/<path>` links for omitted files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobLinker {
    /// Prefix of every link, used as given
    base: String,
    /// Branch segment of the link
    branch: String,
}

impl BlobLinker {
    /// Create a linker for `base`
    ///
    /// The base is a plain prefix and is never rewritten. A base that does not
    /// parse as an absolute URL only produces a warning.
    pub fn new(base: &str, branch: &str) -> Self {
        if let Err(e) = Url::parse(base) {
            warn!(base, error = %e, "base URL is not an absolute URL, using it as given");
        }

        Self {
            base: base.to_string(),
            branch: branch.to_string(),
        }
    }

    /// Link to `rel_path`; the path is used exactly as git listed it
    pub fn blob_url(&self, rel_path: &str) -> String {
        format!("{}/-/blob/{}/{}", self.base, self.branch, rel_path)
    }
}
