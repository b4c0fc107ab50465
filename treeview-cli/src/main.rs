use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tokio_util::sync::CancellationToken;
use treeview::{Color, Node, NodeProvider, RenderOptions, Style, Tree, Viewport};

const FALLBACK_HEIGHT: usize = 20;

/// A scanned filesystem entry.
struct Entry {
    is_dir: bool,
}

#[derive(Parser)]
#[command(name = "treeview")]
#[command(about = "Print a directory tree scrolled to a focused entry", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Levels of directories to read below PATH
    #[arg(long, default_value = "2")]
    depth: usize,

    /// Name of the entry to scroll to (default: the root)
    #[arg(long)]
    focus: Option<String>,

    /// Visible lines (default: terminal rows minus one)
    #[arg(long)]
    height: Option<usize>,

    /// Draw branches with ASCII instead of box drawing
    #[arg(long)]
    ascii: bool,

    /// Write debug logs to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Icons by entry kind, directories get a trailing slash.
struct FileProvider {
    focused: Style,
}

impl NodeProvider<Node<Entry>> for FileProvider {
    fn icon(&self, node: &Node<Entry>) -> String {
        if node.data().is_dir {
            "📁".to_string()
        } else {
            "📄".to_string()
        }
    }

    fn format(&self, node: &Node<Entry>) -> String {
        if node.data().is_dir {
            format!("{}/", node.name())
        } else {
            node.name().to_string()
        }
    }

    fn style(&self, node: &Node<Entry>, focused: bool) -> Style {
        if focused {
            self.focused
        } else if node.data().is_dir {
            Style::new().foreground(Color::Blue)
        } else {
            Style::new()
        }
    }
}

/// Scan `path`, reading directories down to `max_depth` levels below it.
fn scan(path: &Path, depth: usize, max_depth: usize) -> io::Result<Node<Entry>> {
    let is_dir = path.is_dir();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let node = Node::new(path.display().to_string(), name, Entry { is_dir });
    if !is_dir || depth >= max_depth {
        return Ok(node);
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    paths.sort_by(|a, b| b.is_dir().cmp(&a.is_dir()).then_with(|| a.cmp(b)));

    let mut children = Vec::with_capacity(paths.len());
    for child in paths {
        match scan(&child, depth + 1, max_depth) {
            Ok(child) => children.push(child),
            Err(e) => log::warn!("skipping {}: {}", child.display(), e),
        }
    }

    Ok(node.with_children(children).with_expanded(true))
}

fn terminal_height() -> usize {
    match crossterm::terminal::size() {
        Ok((_, rows)) if rows > 1 => rows as usize - 1,
        _ => FALLBACK_HEIGHT,
    }
}

fn main() -> io::Result<()> {
    let args = Cli::parse();

    if let Some(path) = &args.log {
        let log_file = File::create(path)?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
            .map_err(io::Error::other)?;
    }

    let root = scan(&args.path, 0, args.depth)?;
    log::debug!("scanned {} to depth {}", args.path.display(), args.depth);

    let focus_id = args
        .focus
        .as_deref()
        .and_then(|name| find_by_name(&root, name))
        .unwrap_or(&root)
        .id()
        .to_string();

    let options = if args.ascii {
        RenderOptions::ascii()
    } else {
        RenderOptions::default()
    };
    let mut tree = Tree::new(vec![root]).with_options(options);
    tree.set_focused(focus_id);

    let provider = FileProvider {
        focused: Style::new().bold().reverse(),
    };
    let mut viewport = Viewport::new(args.height.unwrap_or_else(terminal_height));
    let cancel = CancellationToken::new();

    match tree.render_with_viewport(&provider, &cancel, &mut viewport) {
        Ok(view) => println!("{view}"),
        Err(partial) => {
            println!("{}", partial.view);
            eprintln!("error: {}", partial.interrupted.cause);
        }
    }

    Ok(())
}

fn find_by_name<'a, T>(node: &'a Node<T>, name: &str) -> Option<&'a Node<T>> {
    if node.name() == name {
        return Some(node);
    }
    node.children().iter().find_map(|child| find_by_name(child, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["treeview"]).unwrap();

        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.depth, 2);
        assert!(cli.focus.is_none());
        assert!(cli.height.is_none());
        assert!(!cli.ascii);
        assert!(cli.log.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "treeview", "src", "--depth", "4", "--focus", "lib.rs", "--height", "10", "--ascii",
            "--log", "out.log",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("src"));
        assert_eq!(cli.depth, 4);
        assert_eq!(cli.focus.as_deref(), Some("lib.rs"));
        assert_eq!(cli.height, Some(10));
        assert!(cli.ascii);
        assert_eq!(cli.log, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn test_cli_rejects_bad_numbers() {
        assert!(Cli::try_parse_from(["treeview", "--depth", "deep"]).is_err());
    }
}
