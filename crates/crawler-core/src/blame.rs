//! Blame resolution over an injected version-control collaborator.

use crate::error::{Error, Result};
use crate::record::{Attribution, LineRange};
use std::path::Path;

/// The version-control operations the crawler depends on.
pub trait BlameProvider {
    /// Root of the repository working tree. Paths passed to [`blame`] are
    /// relative to it.
    ///
    /// [`blame`]: BlameProvider::blame
    fn root(&self) -> &Path;

    /// Name of the currently checked-out branch.
    fn current_branch_name(&self) -> Result<String>;

    /// Attribute every line of `range` in `relative_path` at HEAD.
    ///
    /// For a single-line range the answer is expected to hold exactly one
    /// attribution.
    fn blame(&self, relative_path: &Path, range: LineRange) -> Result<Vec<Attribution>>;
}

/// Resolves single lines to the commit that last touched them.
pub struct BlameResolver<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: BlameProvider + ?Sized> BlameResolver<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Resolve one line. Anything other than exactly one attribution is an
    /// [`Error::BlameInvariant`].
    pub fn resolve(&self, relative_path: &Path, line_number: usize) -> Result<Attribution> {
        let mut found = self
            .provider
            .blame(relative_path, LineRange::single(line_number))?;

        if found.len() != 1 {
            return Err(Error::BlameInvariant {
                path: relative_path.to_path_buf(),
                line: line_number,
                found: found.len(),
            });
        }

        Ok(found.remove(0))
    }
}
