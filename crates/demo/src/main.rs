// File: crates/demo/src/main.rs
// Summary: `profile-charts` CLI: render one chart from attributes or CSV, or the full profile dashboard.

mod csv_input;
mod logging;
mod output;

use anyhow::{bail, Context, Result};
use chart_core::{Attributes, ChartKind};
use clap::{Args, Parser, Subcommand};
use profile::{Colors, Dashboard, GraphQlClient};
use std::path::{Path, PathBuf};

use output::{Format, Target};

#[derive(Parser)]
#[command(name = "profile-charts")]
#[command(version)]
#[command(about = "Render pie, bar and radar charts to SVG, HTML or PNG", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log filter directive (e.g. `chart_core=debug`); overrides -v
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(flatten)]
    target: TargetArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct TargetArgs {
    /// Container width in pixels
    #[arg(long, default_value_t = 400, global = true)]
    width: u32,

    /// Container height in pixels
    #[arg(long, default_value_t = 400, global = true)]
    height: u32,

    /// Theme preset name (light, dark)
    #[arg(long, default_value = "light", global = true)]
    theme: String,

    /// Skip label overlays in PNG output
    #[arg(long, global = true)]
    no_labels: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render a chart from `key=value` attributes
    Render {
        /// pie, bar or radar
        kind: ChartKind,

        /// Attribute as key=value (repeatable), e.g. --attr data=1;2;3
        #[arg(short, long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,

        /// Output format; guessed from the output extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a chart from a `label,value` CSV file
    Csv {
        kind: ChartKind,

        input: PathBuf,

        /// Extra or overriding attributes
        #[arg(short, long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,

        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Output file; defaults to the input name with the format's extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the audit-ratio pie, xp bar and collaborator radar for a profile
    Dashboard(DashboardArgs),
}

#[derive(Args)]
struct DashboardArgs {
    /// Saved GraphQL response (JSON) instead of querying the platform
    #[arg(long, conflicts_with = "username")]
    response: Option<PathBuf>,

    #[arg(short, long, requires = "password")]
    username: Option<String>,

    #[arg(short, long, env = "PROFILE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Existing token; skips sign-in
    #[arg(long, env = "PROFILE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "PROFILE_GRAPHQL_ENDPOINT")]
    graphql_endpoint: Option<String>,

    #[arg(long, env = "PROFILE_SIGNIN_ENDPOINT")]
    signin_endpoint: Option<String>,

    /// Random chart colors from this seed; default hues when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value = "svg")]
    format: Format,

    #[arg(short, long, default_value = "target/out/dashboard")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = cli.log.as_deref().unwrap_or(logging::default_filter(cli.verbose));
    logging::init_tracing(filter);

    let target = Target {
        width: cli.target.width.max(1),
        height: cli.target.height.max(1),
        theme: chart_core::theme::find(&cli.target.theme),
        draw_labels: !cli.target.no_labels,
    };

    match cli.command {
        Command::Render { kind, attrs, format, output } => {
            let attrs = Attributes::from_pairs(&attrs)?;
            let format = format.unwrap_or_else(|| Format::from_path(&output));
            let path = target.render(kind, &attrs, format, &output)?;
            println!("Wrote {}", path.display());
        }
        Command::Csv { kind, input, attrs, format, output } => {
            let rows = csv_input::load_rows(&input)?;
            if rows.is_empty() {
                bail!("no rows in {}", input.display());
            }
            let mut merged = csv_input::rows_to_attrs(kind, &rows);
            for (k, v) in Attributes::from_pairs(&attrs)?.iter() {
                merged.set(k, v);
            }
            let format = format
                .or_else(|| output.as_deref().map(Format::from_path))
                .unwrap_or(Format::Svg);
            let output = output.unwrap_or_else(|| input.with_extension(format.extension()));
            let path = target.render(kind, &merged, format, &output)?;
            println!("Wrote {}", path.display());
        }
        Command::Dashboard(args) => run_dashboard(&target, args)?,
    }
    Ok(())
}

fn run_dashboard(target: &Target, args: DashboardArgs) -> Result<()> {
    let data = match &args.response {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            profile::parse_profile(&json)?
        }
        None => fetch_profile(&args)?,
    };

    let colors = args.seed.map_or(Colors::Default, |seed| Colors::Random { seed });
    let dashboard = Dashboard::from_profile(&data, colors)?;

    if let Some(user) = data.primary_user() {
        let s = profile::reshape::summary(user, data.xp_total());
        println!("{} ({})", s.full_name, s.login);
        if let Some(campus) = &s.campus {
            println!("  campus: {campus}");
        }
        if let Some(ratio) = s.audit_ratio {
            println!("  audit ratio: {ratio:.1}");
        }
        println!("  xp: {}", profile::reshape::format_size(s.xp_total));
        for skill in profile::top_skills(&data.skills, profile::charts::TOP_N) {
            println!("  {}: {}", profile::reshape::skill_label(&skill.kind), skill.amount);
        }
    }

    for (kind, attrs) in dashboard.charts() {
        let path = out_path(&args.out_dir, kind, args.format);
        target.render(kind, attrs, args.format, &path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn fetch_profile(args: &DashboardArgs) -> Result<profile::ProfileData> {
    let Some(endpoint) = args.graphql_endpoint.as_deref() else {
        bail!("--graphql-endpoint (or PROFILE_GRAPHQL_ENDPOINT) is required without --response");
    };
    let token = match (&args.token, &args.username, &args.password) {
        (Some(token), _, _) => token.clone(),
        (None, Some(user), Some(pass)) => {
            let Some(signin) = args.signin_endpoint.as_deref() else {
                bail!("--signin-endpoint (or PROFILE_SIGNIN_ENDPOINT) is required to sign in");
            };
            profile::sign_in(signin, user, pass)?
        }
        _ => bail!("pass --response FILE, --token, or --username and --password"),
    };
    let client = GraphQlClient::new(endpoint, token)?;
    Ok(client.fetch_profile()?)
}

fn out_path(dir: &Path, kind: ChartKind, format: Format) -> PathBuf {
    let name = match kind {
        ChartKind::Pie => "pie",
        ChartKind::Bar => "bar",
        ChartKind::Radar => "radar",
    };
    dir.join(format!("{name}.{}", format.extension()))
}
