use std::path::PathBuf;

use anyhow::{bail, Context};
use figurekit::{
    build_drawing, figure_style, init_logging, Config, CreationTool, Drawing, Figure, Point,
    ShapeType, Tool, BUILD_DATE, VERSION,
};

const USAGE: &str = "usage: figurekit [--config <file>] <list | show <name> | demo <name>>";

enum Command {
    List,
    Show(String),
    Demo(String),
}

struct Args {
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut config = None;
    let mut words = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a file")?;
            config = Some(PathBuf::from(path));
        } else {
            words.push(arg);
        }
    }

    let command = match words.as_slice() {
        [cmd] if cmd == "list" => Command::List,
        [cmd, name] if cmd == "show" => Command::Show(name.clone()),
        [cmd, name] if cmd == "demo" => Command::Demo(name.clone()),
        _ => bail!(USAGE),
    };
    Ok(Args { config, command })
}

fn print_figure(figure: &Figure, depth: usize) {
    let bbox = figure.bbox();
    println!(
        "{:indent$}{} ({}, {}) {}x{} {}",
        "",
        figure.tag(),
        bbox.position.x,
        bbox.position.y,
        bbox.size.w,
        bbox.size.h,
        figure.color(),
        indent = depth * 2
    );
    for child in figure.children() {
        print_figure(child, depth + 1);
    }
}

fn sketch(tool: &mut dyn Tool, drawing: &mut Drawing, from: (f64, f64), to: (f64, f64)) {
    tool.pointer_down(drawing, Point::new(from.0, from.1));
    tool.pointer_move(drawing, Point::new(to.0, to.1));
    tool.pointer_up(drawing, Point::new(to.0, to.1));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    init_logging(&config.logging)?;
    tracing::info!("figurekit {} (built {})", VERSION, BUILD_DATE);
    tracing::debug!("storage backend: {}", config.storage.backend);

    let account = config.storage.account.clone();
    let mut drawing = build_drawing(&config);

    match args.command {
        Command::List => {
            for name in drawing.list(&account).await? {
                println!("{}", name);
            }
        }
        Command::Show(name) => {
            let count = drawing.open(&account, &name).await?;
            tracing::info!("{} has {} figure(s)", name, count);
            for figure in drawing.figures() {
                print_figure(figure, 0);
            }
        }
        Command::Demo(name) => {
            let style = figure_style(&config.editor);
            let menu_bar = config.editor.menu_bar_height;
            let offset = menu_bar + 10.0;

            let mut rect = CreationTool::new(ShapeType::Rectangle, style.clone())
                .with_menu_bar_height(menu_bar);
            sketch(&mut rect, &mut drawing, (10.0, offset), (110.0, offset + 60.0));
            let mut hexagon = CreationTool::new(ShapeType::Hexagon, style.clone())
                .with_menu_bar_height(menu_bar);
            sketch(&mut hexagon, &mut drawing, (130.0, offset), (190.0, offset + 60.0));
            drawing.select_all();
            drawing.group();

            let mut text = CreationTool::text("FigureKit", style).with_menu_bar_height(menu_bar);
            sketch(&mut text, &mut drawing, (10.0, offset + 80.0), (200.0, offset + 130.0));

            let written = drawing.save(&account, &name).await?;
            tracing::info!("saved {} ({} bytes)", name, written);
        }
    }

    Ok(())
}
