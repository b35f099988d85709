use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "routeplay", version)]
struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the nodes of a graph.
    Nodes(GraphArgs),
    /// Compute a route and print distances, path and cost.
    Route(RouteArgs),
    /// Print every search step.
    Trace(RouteArgs),
    /// Drive the playback scheduler and print each frame.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct GraphArgs {
    /// Graph definition JSON. Defaults to the built-in tower map.
    #[arg(long)]
    graph: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RouteArgs {
    #[command(flatten)]
    graph: GraphArgs,

    /// Source node label.
    #[arg(long)]
    from: String,

    /// Target node label.
    #[arg(long)]
    to: String,

    /// Travel mode preset.
    #[arg(long, value_enum, default_value_t = ModeChoice::Foot, conflicts_with = "multiplier")]
    mode: ModeChoice,

    /// Explicit weight multiplier, instead of a mode.
    #[arg(long)]
    multiplier: Option<f64>,

    /// Emit JSON instead of text. Unreached distances are written as `null`.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Sleep between frames so playback runs at wall-clock speed.
    #[arg(long)]
    realtime: bool,

    /// Milliseconds between algorithm steps.
    #[arg(long)]
    step_ms: Option<u64>,

    /// Milliseconds between motion frames.
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Canvas units covered per motion frame.
    #[arg(long)]
    step_px: Option<f64>,

    /// Milliseconds between counter samples.
    #[arg(long)]
    counter_ms: Option<u64>,

    /// Counter easing curve (linear, out_quad, in_out_quad, out_cubic).
    #[arg(long)]
    ease: Option<routeplay::Ease>,

    /// Uniform map → canvas scale.
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Foot,
    Glider,
    Horse,
}

impl From<ModeChoice> for routeplay::TravelMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Foot => Self::Foot,
            ModeChoice::Glider => Self::Glider,
            ModeChoice::Horse => Self::Horse,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Nodes(args) => cmd_nodes(args),
        Command::Route(args) => cmd_route(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load_graph(args: &GraphArgs) -> anyhow::Result<routeplay::Graph> {
    let graph = match &args.graph {
        Some(path) => routeplay::GraphDef::from_path(path)?
            .build()
            .with_context(|| format!("build graph from '{}'", path.display()))?,
        None => routeplay::tower_map()?,
    };
    Ok(graph)
}

fn plan(args: &RouteArgs) -> anyhow::Result<(routeplay::Graph, routeplay::RouteOutcome)> {
    let graph = load_graph(&args.graph)?;
    let multiplier = match args.multiplier {
        Some(m) => routeplay::Multiplier::new(m)?,
        None => routeplay::TravelMode::from(args.mode).multiplier(),
    };
    let request = routeplay::RunRequest::new(&args.from, &args.to, multiplier);
    let outcome = routeplay::plan_route(&graph, &request)?;
    Ok((graph, outcome))
}

fn cmd_nodes(args: GraphArgs) -> anyhow::Result<()> {
    let graph = load_graph(&args)?;
    for (i, node) in graph.nodes().iter().enumerate() {
        let degree = graph
            .neighbors(routeplay::NodeIdx(i as u32), routeplay::Multiplier::ONE)
            .count();
        println!(
            "{}\t({:.1}, {:.1})\t{degree} edges",
            node.id, node.position.x, node.position.y
        );
    }
    Ok(())
}

fn cmd_route(args: RouteArgs) -> anyhow::Result<()> {
    let (graph, outcome) = plan(&args)?;
    let labels: Vec<&str> = outcome
        .path()
        .nodes()
        .iter()
        .map(|&n| graph.label(n))
        .collect();

    if args.json {
        let value = serde_json::json!({
            "source": args.from,
            "target": args.to,
            "reachable": outcome.is_reachable(),
            "path": labels,
            "total_cost": outcome.total_cost(),
            "distances": outcome.distance_map(&graph),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match outcome.total_cost() {
        Some(cost) => {
            println!("path: {}", outcome.path().display(&graph));
            println!("cost: {cost:.1}");
        }
        None => println!("no route from {} to {}", args.from, args.to),
    }
    println!("distances:");
    for (label, d) in outcome.distance_map(&graph) {
        println!("  {label}\t{}", routeplay::distance_label(d));
    }
    Ok(())
}

fn cmd_trace(args: RouteArgs) -> anyhow::Result<()> {
    let (graph, outcome) = plan(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(outcome.trace().as_ref())?);
        return Ok(());
    }
    for (i, event) in outcome.trace().iter().enumerate() {
        println!("{i:>3} {}", routeplay::describe_step(&graph, event).caption);
    }
    if !outcome.is_reachable() {
        println!("no route from {} to {}", args.from, args.to);
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let (graph, outcome) = plan(&args.route)?;

    let mut config = routeplay::PlaybackConfig::default();
    if let Some(v) = args.step_ms {
        config.step_interval_ms = v;
    }
    if let Some(v) = args.frame_ms {
        config.frame_interval_ms = v;
    }
    if let Some(v) = args.step_px {
        config.step_px = v;
    }
    if let Some(v) = args.counter_ms {
        config.counter_interval_ms = v;
    }
    if let Some(v) = args.ease {
        config.counter_ease = v;
    }
    if let Some(v) = args.scale {
        config.transform.scale = v;
    }

    let plan = routeplay::PlaybackPlan::for_outcome(&graph, &outcome, &config)?;
    let mut slot = routeplay::PlaybackSlot::new();
    slot.begin(routeplay::TraceReplayScheduler::new(plan));
    let scheduler = slot
        .current_mut()
        .context("playback slot is empty after begin")?;

    let mut last = routeplay::TimeMs::ZERO;
    let mut emit = |frame: routeplay::PlaybackFrame| -> anyhow::Result<()> {
        if args.realtime {
            let gap = routeplay::TimeMs(frame.at().0.saturating_sub(last.0));
            std::thread::sleep(Duration::from_secs_f64(gap.as_secs_f64()));
        }
        last = frame.at();
        if args.route.json {
            println!("{}", serde_json::to_string(&frame)?);
            return Ok(());
        }
        match &frame {
            routeplay::PlaybackFrame::Step { at, event, .. } => {
                let caption = routeplay::describe_step(&graph, event).caption;
                println!("{:>8} step    {caption}", at.to_string());
            }
            routeplay::PlaybackFrame::Motion { at, position, .. } => {
                println!(
                    "{:>8} motion  ({:.1}, {:.1})",
                    at.to_string(),
                    position.x,
                    position.y
                );
            }
            routeplay::PlaybackFrame::Counter { at, sample, .. } => {
                println!("{:>8} counter {:.1}", at.to_string(), sample.value);
            }
        }
        Ok(())
    };

    scheduler.start_steps()?;
    while let Some(frame) = scheduler.advance() {
        emit(frame)?;
    }
    if outcome.is_reachable() {
        scheduler.start_motion()?;
        while let Some(frame) = scheduler.advance() {
            emit(frame)?;
        }
    } else if !args.route.json {
        println!("no route from {} to {}", args.route.from, args.route.to);
    }
    Ok(())
}
