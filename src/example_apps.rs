use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::channels::{ChannelRanking, rank_channels};
use crate::config::{ChannelRankingConfig, RadarConfig, ScatterConfig};
use crate::constants::{demo, limits};
use crate::normalize::MinMax;
use crate::radar::{RadarProjection, project_radar};
use crate::scatter::{ScatterProjection, project_scatter};
use crate::source::{FileSource, load_records};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Channels,
    Scatter,
    Radar,
}

#[derive(Debug, Parser)]
#[command(
    name = "projection_demo",
    disable_help_subcommand = true,
    about = "Print plot-ready projections for a video dataset",
    long_about = "Parse a delimited video-performance dataset and print one of the three projections (channel ranking, engagement scatter, radar shapes) as a plain-text report.",
    after_help = "The dataset is resolved in order by explicit --csv, the VIDPLOT_DEMO_CSV environment variable, then the bundled sample."
)]
struct ProjectionDemoCli {
    #[arg(long, value_name = "PATH", help = "Optional dataset file override")]
    csv: Option<PathBuf>,
    #[arg(long, value_enum, help = "Projection to print (defaults to channels)")]
    view: Option<ViewArg>,
    #[arg(
        long = "max-channels",
        default_value_t = limits::DEFAULT_MAX_CHANNELS,
        value_parser = parse_positive_usize,
        help = "Top channels kept in the ranking"
    )]
    max_channels: usize,
    #[arg(
        long = "max-points",
        default_value_t = limits::DEFAULT_MAX_POINTS,
        value_parser = parse_positive_usize,
        help = "Top records kept in the scatter projection"
    )]
    max_points: usize,
    #[arg(
        long = "max-shapes",
        default_value_t = limits::DEFAULT_MAX_SHAPES,
        value_parser = parse_positive_usize,
        help = "Top records given a radar shape"
    )]
    max_shapes: usize,
    #[arg(
        long,
        default_value_t = limits::DEFAULT_RADAR_RADIUS,
        help = "Radar outline radius"
    )]
    radius: f64,
}

#[derive(Debug, Parser)]
#[command(
    name = "dataset_summary",
    disable_help_subcommand = true,
    about = "Print parse-level statistics for a video dataset",
    long_about = "Parse a delimited video-performance dataset and print record, channel, and value-range statistics without projecting anything.",
    after_help = "The dataset is resolved in order by explicit --csv, the VIDPLOT_DEMO_CSV environment variable, then the bundled sample."
)]
struct DatasetSummaryCli {
    #[arg(long, value_name = "PATH", help = "Optional dataset file override")]
    csv: Option<PathBuf>,
}

/// Entry point shared by the `projection_demo` example binary.
pub fn run_projection_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<ProjectionDemoCli, _>(
        std::iter::once("projection_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let path = resolve_dataset_path(cli.csv)?;
    let source = FileSource::new("demo_dataset", &path);
    let records = load_records(&source)?;
    println!("Loaded {} records from {}", records.len(), path.display());
    println!();

    match cli.view.unwrap_or(ViewArg::Channels) {
        ViewArg::Channels => {
            let ranking = rank_channels(
                &records,
                &ChannelRankingConfig {
                    max_channels: cli.max_channels,
                },
            );
            print_channel_ranking(&ranking);
        }
        ViewArg::Scatter => {
            let projection = project_scatter(
                &records,
                &ScatterConfig {
                    max_points: cli.max_points,
                },
            );
            print_scatter(&projection);
        }
        ViewArg::Radar => {
            let mut projection = project_radar(
                &records,
                &RadarConfig {
                    max_shapes: cli.max_shapes,
                    radius: cli.radius,
                },
            );
            print_radar(&mut projection);
        }
    }

    Ok(())
}

/// Entry point shared by the `dataset_summary` example binary.
pub fn run_dataset_summary<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<DatasetSummaryCli, _>(
        std::iter::once("dataset_summary".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let path = resolve_dataset_path(cli.csv)?;
    let source = FileSource::new("demo_dataset", &path);
    let records = load_records(&source)?;

    println!("=== dataset summary ===");
    println!("source       : {}", path.display());
    println!("records      : {}", records.len());

    if records.is_empty() {
        return Ok(());
    }

    let all_channels = rank_channels(
        &records,
        &ChannelRankingConfig {
            max_channels: usize::MAX,
        },
    );
    println!("channels     : {}", all_channels.len());

    if let (Some(oldest), Some(newest)) = (
        records.iter().map(|r| r.published_at).min(),
        records.iter().map(|r| r.published_at).max(),
    ) {
        println!(
            "date range   : {} .. {}",
            oldest.format("%Y-%m-%d"),
            newest.format("%Y-%m-%d")
        );
    }

    let views = MinMax::of(records.iter().map(|r| r.view_count as f64));
    let like_ratios = MinMax::of(records.iter().map(|r| r.like_ratio()));
    let comment_ratios = MinMax::of(records.iter().map(|r| r.comment_ratio()));
    println!("views        : {:.0} .. {:.0}", views.min, views.max);
    println!(
        "like ratio   : {:.4} .. {:.4}",
        like_ratios.min, like_ratios.max
    );
    println!(
        "comment ratio: {:.4} .. {:.4}",
        comment_ratios.min, comment_ratios.max
    );

    Ok(())
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse value '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("value must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn resolve_dataset_path(explicit: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Ok(path) = env::var(demo::DATASET_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    for candidate in demo::DATASET_CANDIDATES {
        let path = PathBuf::from(candidate);
        if path.is_file() {
            return Ok(path);
        }
    }
    Err(format!(
        "no dataset found; pass --csv <PATH> or set {}",
        demo::DATASET_ENV_VAR
    )
    .into())
}

fn print_channel_ranking(ranking: &ChannelRanking) {
    println!("=== channel ranking ===");
    if ranking.is_empty() {
        println!("No channels aggregated.");
        return;
    }
    println!("max total views: {:.0}", ranking.max_total_views);
    for (idx, aggregate) in ranking.channels.iter().enumerate() {
        println!("--- channel #{} ---", idx);
        println!("name         : {}", aggregate.channel_name);
        println!("videos       : {}", aggregate.video_count);
        println!("total views  : {:.0}", aggregate.total_views);
        println!("total likes  : {:.0}", aggregate.total_likes);
        println!("total comment: {:.0}", aggregate.total_comments);
        println!("height01     : {:.4}", ranking.height01(aggregate));
    }
}

fn print_scatter(projection: &ScatterProjection<'_>) {
    println!("=== engagement scatter ===");
    if projection.is_empty() {
        println!("No points projected.");
        return;
    }
    println!(
        "engagement range: {:.6} .. {:.6}",
        projection.engagement.min, projection.engagement.max
    );
    for point in &projection.points {
        println!(
            "- t={:.3} like01={:.3} comment01={:.3} eng01={:.3} [{}] {}",
            point.time_rank01,
            point.like_ratio01,
            point.comment_ratio01,
            projection.engagement01(point),
            point.record.published_at.format("%Y-%m-%d"),
            point.record.title,
        );
    }
}

fn print_radar(projection: &mut RadarProjection<'_>) {
    println!("=== radar shapes ===");
    if projection.is_empty() {
        println!("No shapes projected.");
        return;
    }
    // Highlight the most viewed shape so the report shows selection state.
    projection.select(0);
    for (idx, shape) in projection.shapes().iter().enumerate() {
        println!("--- shape #{} ---", idx);
        println!("title        : {}", shape.record.title);
        println!("channel      : {}", shape.record.channel_name);
        println!("views01      : {:.4}", shape.views01);
        println!("likes01      : {:.4}", shape.likes01);
        println!("comments01   : {:.4}", shape.comments01);
        println!("like/comment : {:.4}", shape.like_comment_ratio01);
        let outline: Vec<String> = shape
            .outline
            .iter()
            .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
            .collect();
        println!("outline      : {}", outline.join(" "));
        println!("highlighted  : {}", shape.highlighted);
    }
    if let Some(shape) = projection.selected_shape() {
        println!();
        println!("selected     : {}", shape.record.title);
    }
}
