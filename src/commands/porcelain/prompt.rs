use crate::areas::git_dir::GitDir;
use crate::areas::repository::Repository;
use crate::artifacts::prompt::renderer::PromptRenderer;
use crate::artifacts::prompt::style::RenderOptions;
use std::io::Write;

impl Repository {
    /// Writes the one-line prompt status of the repository, without a
    /// trailing newline.
    pub fn prompt(&self, options: RenderOptions) -> anyhow::Result<()> {
        tracing::info!(path = %self.path().display(), "running porcelain");

        let git_dir = GitDir::new(self.git().git_dir()?.into_boxed_path());
        let status = self.git().status()?;
        let line = PromptRenderer::new(options).render(&status, &git_dir);

        let mut writer = self.writer();
        write!(writer, "{}", line)?;
        writer.flush()?;

        Ok(())
    }
}
