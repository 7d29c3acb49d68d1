use std::io::Write;

use clap::Parser;

use crate::generate::specialization;

#[derive(Debug, Parser)]
pub(crate) struct Render {
    /// Element type to specialize to
    pub(crate) element_type: String,
    /// Module name to put in the header.
    /// Defaults to `f` followed by the lowercased element type.
    #[arg(short, long)]
    pub(crate) package: Option<String>,
}

impl Render {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.write(&mut stdout)
    }

    fn write(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let specialization = specialization(&self.element_type, self.package.as_deref())?;
        out.write_all(specialization.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
