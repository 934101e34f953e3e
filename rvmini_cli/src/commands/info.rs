use clap::Parser;
use rvmini_asm::{Mnemonic, PseudoMnemonic};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "info", about = "Show version and the supported instructions")]
pub struct InfoCmd;

impl InfoCmd {
    pub fn run(self) -> anyhow::Result<()> {
        eprintln!("rvmini {}", env!("CARGO_PKG_VERSION"));
        eprintln!("OS: {}", std::env::consts::OS);
        eprintln!("Arch: {}", std::env::consts::ARCH);
        eprintln!();

        eprintln!("{:<6} {:<8} {:<5} layout", "insn", "opcode", "func");
        for mnemonic in Mnemonic::iter() {
            let codes = mnemonic.codes();
            eprintln!(
                "{:<6} {:07b}  {:<5} {:?}",
                mnemonic.as_ref(),
                codes.class.opcode(),
                codes.func,
                codes.class.layout()
            );
        }

        let pseudos: Vec<String> = PseudoMnemonic::iter().map(|p| p.to_string()).collect();
        eprintln!("Pseudo-instructions: {}", pseudos.join(", "));
        Ok(())
    }
}
