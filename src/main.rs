use std::io::{self, BufRead, Write};

use color_eyre::eyre::WrapErr;
use env_logger::Env;
use xprobe::network::{reference, Topology};
use xprobe::utils::config::{Arguments, Config};
use xprobe::utils::yaml;
use xprobe::{LoadError, QueryError, Session};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Arguments = argh::from_env();
    let mut config = match &args.config {
        Some(path) => yaml::load_config(path)
            .wrap_err_with(|| format!("cannot load config {}", path))?,
        None => Config::default(),
    };
    config.override_from_args(&args);
    let ends = args.probe_ends()?;

    let mut session = Session::new(&config)?;
    if args.list || ends.is_some() {
        session.load(load_topology(&config)?)?;
        if args.list {
            print_listing(&session);
        }
        if let Some((from, to)) = ends {
            run_xprobe(&mut session, from, to);
        }
        return Ok(());
    }
    menu(&mut session, &config)?;
    Ok(())
}

fn load_topology(config: &Config) -> Result<Topology, LoadError> {
    match &config.topology {
        Some(path) => yaml::load_topology(path),
        None => reference::three_tier(),
    }
}

fn menu(session: &mut Session, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n=== NETWORK SIMULATOR ===");
        println!("1. Load network topology");
        println!("2. List devices and addresses");
        println!("3. Run XProbe (ping/RTT)");
        println!("4. Exit");
        let option = match prompt(&mut lines, "\nChoose an option: ")? {
            Some(option) => option,
            None => break,
        };
        match option.trim() {
            "1" => load_into(session, config),
            "2" => print_listing(session),
            "3" => {
                let from = prompt(&mut lines, "Source (address or device): ")?;
                let to = prompt(&mut lines, "Destination (address or device): ")?;
                match (from, to) {
                    (Some(from), Some(to)) => run_xprobe(session, &from, &to),
                    _ => break,
                }
            }
            "4" => break,
            other => println!("Invalid option {:?}.", other),
        }
    }
    println!("Shutting down simulator.");
    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    lines.next().transpose()
}

fn load_into(session: &mut Session, config: &Config) {
    println!("\n[System] Loading topology definitions...");
    match load_topology(config).and_then(|topology| session.load(topology)) {
        Ok(()) => {
            let listing = session.listing().unwrap_or_default();
            println!("[Success] Topology loaded, {} devices.", listing.len());
        }
        Err(LoadError::AlreadyLoaded) => println!("[System] Topology is already loaded."),
        Err(err) => println!("[Error] {}", err),
    }
}

fn print_listing(session: &Session) {
    let listing = match session.listing() {
        Ok(listing) => listing,
        Err(err) => return report(&err),
    };
    println!("\n--- Devices in the network ---");
    println!("{:<12} | {:<12} | {}", "DEVICE", "ROLE", "ADDRESSES");
    println!("{}", "-".repeat(60));
    for row in listing {
        let role = row.role.map(|role| role.to_string()).unwrap_or_default();
        println!("{:<12} | {:<12} | {}", row.name, role, row.addresses.join(", "));
    }
    println!("{}", "-".repeat(60));
}

fn run_xprobe(session: &mut Session, from: &str, to: &str) {
    println!("\n--- Running XProbe ---");
    let outcome = session.xprobe(from, to, |trace, sample| {
        if sample.seq == 1 {
            println!("Logical route: {}", trace.hops.join(" -> "));
            println!("\nCollecting RTT samples...");
        }
        println!("  Seq={} | RTT={:.2} ms", sample.seq, sample.rtt);
    });
    match outcome {
        Ok(Some(probe)) => {
            let result = &probe.result;
            println!("\n[XProbe Result] Status: UP | avg RTT: {:.2} ms (min {:.2}, max {:.2})",
                     result.mean,
                     result.min().unwrap_or(result.mean),
                     result.max().unwrap_or(result.mean));
        }
        Ok(None) => println!("Destination unreachable."),
        Err(err) => report(&err),
    }
}

fn report(err: &QueryError) {
    match err {
        QueryError::NotReady => println!("[Error] Load the network topology first (option 1)."),
        QueryError::NotFound(token) => println!("ERROR: {:?} not found in the routing table.", token),
    }
}
