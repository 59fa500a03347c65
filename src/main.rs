use clap::Parser;

use prt::{cli, Error, Merger, Result, SplitterBuilder};

fn main() {
    env_logger::init();

    let opt = match cli::Opt::try_parse() {
        Ok(opt) => opt,
        Err(err) if err.kind() == clap::ErrorKind::DisplayHelp => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("{}", Error::from(err));
            std::process::exit(1);
        }
    };

    let task = match opt.validate() {
        Ok(task) => task,
        Err(problems) => {
            cli::print_usage();
            for problem in &problems {
                eprintln!("{}", problem);
            }
            if !opt.unmatched.is_empty() {
                eprintln!("Unknown options: {}", opt.unmatched.join(" "));
            }
            std::process::exit(1);
        }
    };

    if let Err(err) = run(task) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(task: cli::Task) -> Result<()> {
    match task {
        cli::Task::Split { full, part_size } => {
            let created = SplitterBuilder::new(&full)
                .part_size(part_size)
                .build()?
                .run()?;
            println!("Total created files: {}", created);
        }
        cli::Task::Merge { full, parts } => {
            Merger::new(parts, &full).run()?;
        }
    }
    Ok(())
}
