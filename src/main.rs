use clap::{Parser, Subcommand};
use headless_pages::{config, generate, media, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "headless-pages")]
#[command(about = "Static HTML renderer for headless CMS content")]
#[command(long_about = "\
Static HTML renderer for headless CMS content

Page payloads and the site-wide navbar/footer payload, exported from the
content backend as JSON, are rendered into self-contained HTML pages.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── global.json                  # Navbar + footer payload
  └── pages/
      ├── 001-home.json            # → index.html
      ├── 010-about.json           # → about/index.html
      └── drafts.json              # Unnumbered pages sort last

Relative media paths are resolved against the CMS_API_URL environment
variable, then [media] base_url in config.toml, then http://localhost:1337.

Run 'headless-pages gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Generate,
    /// Validate content directory without rendering
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            println!("==> Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);

            let base_url = media_base_url(&manifest.config);
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest, &cli.output, &base_url)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Media host: environment first, then config, then the local default.
fn media_base_url(config: &config::SiteConfig) -> String {
    let env = std::env::var(media::API_URL_ENV).ok();
    media::resolve_base_url(env.as_deref(), config.media.base_url.as_deref())
}
