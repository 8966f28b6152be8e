//! Release chores: man pages and shell completions for `terato`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for terato")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and each subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Only this shell; all supported shells when omitted.
        #[arg(long)]
        shell: Option<Shell>,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, shell),
    }
}

fn man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = terato::command();
    write_man(out_dir, "terato", cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("terato-{}", sub.get_name());
        write_man(out_dir, &name, sub.clone().name(name.clone()))?;
    }
    Ok(())
}

fn write_man(out_dir: &Path, name: &str, cmd: clap::Command) -> io::Result<()> {
    let mut buf = Vec::new();
    Man::new(cmd).render(&mut buf)?;
    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buf)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn completions(out_dir: &Path, shell: Option<Shell>) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let shells = shell.map_or_else(|| Shell::value_variants().to_vec(), |s| vec![s]);
    let mut cmd = terato::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "terato", out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
