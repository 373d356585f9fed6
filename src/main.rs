use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use log::debug;

use revtail::{Args, Offset, ReverseLineScanner, Tail, write_header, write_out};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = Args::parse();

    let scanner = ReverseLineScanner::new(args.line_ending()).with_chunk_size(args.chunk_size);
    debug!("using {:?}", scanner);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    // Process each input file
    for (idx, input_file) in args.filename.iter().enumerate() {
        if let Err(e) = tail_one(&args, &scanner, input_file, idx == 0, &mut out) {
            eprintln!("revtail: {:#}", e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn tail_one<W: Write>(
    args: &Args,
    scanner: &ReverseLineScanner,
    path: &Path,
    first: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut file: File = File::open(path)
        .with_context(|| format!("cannot open '{}' for reading", path.display()))?;

    // Print header if multiple files or verbose
    if args.show_headers() {
        write_header(out, &path.display().to_string(), first)?;
    }

    let offset = args.offset;

    if args.all {
        let pages = scanner.pages(&mut file, args.num_lines).starting_at(offset);
        let mut last: Option<Offset> = None;
        for page in pages {
            let tail: Tail =
                page.with_context(|| format!("error reading '{}'", path.display()))?;
            write_out(out, &tail)?;
            last = Some(tail.offset());
        }
        if args.show_offset {
            report_offset(path, last.unwrap_or(Offset::Exhausted));
        }
    } else {
        let tail = scanner
            .scan(&mut file, args.num_lines, offset)
            .with_context(|| format!("error reading '{}'", path.display()))?;
        write_out(out, &tail)?;
        if args.show_offset {
            report_offset(path, tail.offset());
        }
    }

    Ok(())
}

fn report_offset(path: &Path, offset: Offset) {
    eprintln!("==> {}: offset {} <==", path.display(), offset);
}
