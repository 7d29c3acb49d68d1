use clap::Parser;
use fseq_codegen::Operation;

#[derive(Debug, Parser)]
pub(crate) struct Operations {
    /// Also print a one-line description of each operation
    #[arg(long)]
    pub(crate) describe: bool,
}

impl Operations {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        print!("{}", listing(self.describe));
        Ok(())
    }
}

fn listing(describe: bool) -> String {
    let mut out = String::new();
    for op in Operation::all() {
        let line = format!(
            "{:<12} {:<8} {}",
            op.kind().to_string(),
            op.to_string(),
            op.signature()
        );
        out.push_str(line.trim_end());
        out.push('\n');
        if describe {
            out.push_str(&format!("{:22}{}\n", "", op.summary()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing() {
        let listing = listing(false);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(
            lines[0],
            "constructor  new      Sequence::new(producer: impl Producer) -> Sequence"
        );
        assert_eq!(lines[10], "terminal     fold     sequence.fold(seed: T, f: FnMut(T, T) -> T) -> T");
    }

    #[test]
    fn test_listing_describe() {
        let listing = listing(true);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[1], format!("{}Wrap a producer into a sequence.", " ".repeat(22)));
    }
}
