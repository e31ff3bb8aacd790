use hypermaze::{Field, render};

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut dims = Vec::new();
    let mut seed = None;
    let mut svg = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--svg" => svg = true,
            "--seed" => {
                seed = iter.next().and_then(|s| s.parse::<u64>().ok());
                if seed.is_none() {
                    return usage();
                }
            }
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => dims.push(n),
                _ => return usage(),
            },
        }
    }
    let sizes = match dims.len() {
        0 => [10, 10, 1, 1],
        2 => [dims[0], dims[1], 1, 1],
        4 => [dims[0], dims[1], dims[2], dims[3]],
        _ => return usage(),
    };

    let field = Field::from_seed(seed, sizes);
    if svg {
        render::svg::write_layer(&field, [0, 0], &mut std::io::stdout())?;
    } else {
        render::text::print_layer(&field, [0, 0])?;
        println!(
            "start {:?}  end {:?}  path length {}",
            field.start_position(),
            field.end_position(),
            field.shortest_path().len()
        );
    }
    Ok(())
}

fn usage() -> std::io::Result<()> {
    eprintln!("usage: hypermaze [WIDTH HEIGHT [DEPTH LAYERS]] [--seed N] [--svg]");
    eprintln!("       every dimension must be at least 1");
    Ok(())
}

/// Log to a daily file under logs/; the guard must live until exit so the
/// non-blocking writer gets to flush.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "hypermaze.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .init();
    guard
}
