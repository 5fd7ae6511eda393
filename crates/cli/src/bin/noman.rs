use anyhow::Result;

fn main() -> Result<()> {
    noman_cli::main_entry()
}
