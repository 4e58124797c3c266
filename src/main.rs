//! Noderank CLI — compute PageRank over edge-list files and print the
//! top-ranked nodes with their adjacency lists.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use noderank::algo::PageRank;
use noderank::graph::{read_graph, NodeId};
use noderank::report::rank_descending;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "noderank", version, about = "PageRank over edge-list graphs")]
struct Cli {
    /// Edge-list files: a header line, then `source,target` rows
    #[arg(required = true)]
    edges: Vec<PathBuf>,

    /// How many top-ranked nodes to display
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Per-node convergence threshold
    #[arg(long, default_value_t = 1e-6, value_parser = parse_positive_f64)]
    tolerance: f64,

    /// Hard stop on the number of sweeps
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    max_iterations: u64,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct RankedNode {
    rank: usize,
    node: NodeId,
    score: f64,
    adjacent: Vec<NodeId>,
}

fn parse_positive_f64(text: &str) -> Result<f64, String> {
    let value: f64 = text.parse().map_err(|e| format!("{e}"))?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(String::from("must be positive"))
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let engine = PageRank::new(cli.tolerance, cli.max_iterations);

    for path in &cli.edges {
        let graph = read_graph(path)?;
        let scores = engine.compute(&graph)?;

        let rows: Vec<RankedNode> = rank_descending(&scores)
            .into_iter()
            .take(cli.top)
            .enumerate()
            .map(|(i, (node, score))| RankedNode {
                rank: i + 1,
                node,
                score,
                adjacent: graph.neighbors(node).to_vec(),
            })
            .collect();

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            OutputFormat::Csv => {
                println!("rank,node,score,adjacent");
                for row in &rows {
                    println!("{}", csv_line(row));
                }
            }
            OutputFormat::Table => {
                println!("{}", path.display());
                println!("Number of nodes in the graph: {}", graph.node_count());
                print_table(&rows);
            }
        }
    }

    Ok(())
}

fn print_table(rows: &[RankedNode]) {
    if rows.is_empty() {
        println!("(no nodes)");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Node", "PageRank", "Adjacent nodes"]);

    for row in rows {
        table.add_row(vec![
            row.rank.to_string(),
            row.node.to_string(),
            format!("{:.6}", row.score),
            join_nodes(&row.adjacent),
        ]);
    }

    println!("{}", table);
    println!("{} row(s)", rows.len());
}

fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// Adjacency is space-joined so the row stays a four-column CSV record
fn csv_line(row: &RankedNode) -> String {
    format!(
        "{},{},{},{}",
        row.rank,
        row.node,
        row.score,
        join_nodes(&row.adjacent)
    )
}
