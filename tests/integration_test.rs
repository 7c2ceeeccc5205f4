use xprobe::network::reference;
use xprobe::probe::{NoDelay, ProbeSimulator};
use xprobe::utils::config::Config;
use xprobe::utils::yaml;
use xprobe::{LoadError, QueryError, Session};

fn session() -> Session {
    let config = Config { probe: Default::default(), topology: None };
    let simulator = ProbeSimulator::new(&config.probe).unwrap().with_pacer(NoDelay.into());
    Session::with_simulator(simulator)
}

fn hops(session: &Session, src: &str, dst: &str) -> Option<(u64, String)> {
    session.shortest_path(src, dst).unwrap()
        .map(|trace| (trace.cost, trace.hops.join(" ")))
}

#[test]
fn it_runs_xprobe_on_reference() {
    let mut session = session();
    assert_eq!(session.xprobe("192.168.10.2", "192.168.10.98", |_, _| {}).err(),
               Some(QueryError::NotReady));
    session.load(reference::three_tier().unwrap()).unwrap();

    assert_eq!(hops(&session, "h1", "h7"), Some((14, "h1 e1 a1 c1 a2 e4 h7".into())));
    assert_eq!(hops(&session, "h1", "h2"), Some((8, "h1 e1 h2".into())));
    assert_eq!(hops(&session, "h4", "h4"), Some((0, "h4".into())));

    let probe = session.xprobe("192.168.10.2", "192.168.10.98", |_, _| {})
        .unwrap()
        .unwrap();
    assert_eq!(probe.result.samples.len(), 3);
    assert!(28.1 - 1e-9 <= probe.result.mean && probe.result.mean <= 29.5 + 1e-9);

    assert_eq!(session.xprobe("192.168.10.2", "10.0.0.1", |_, _| {}).err(),
               Some(QueryError::NotFound("10.0.0.1".into())));
}

#[test]
fn it_loads_reference_from_yaml() {
    let topology = yaml::load_topology("data/topology/three-tier.yaml").unwrap();
    let builtin = reference::three_tier().unwrap();
    assert_eq!(topology.listing(), builtin.listing());
    assert_eq!(topology.network.link_count(), builtin.network.link_count());

    let mut from_file = session();
    let mut from_code = session();
    from_file.load(topology).unwrap();
    from_code.load(builtin).unwrap();
    for src in ["h1", "h3", "e2", "c1", "a2"].iter() {
        for dst in ["h2", "h5", "h8", "e4", "a1"].iter() {
            assert_eq!(hops(&from_file, src, dst), hops(&from_code, src, dst));
        }
    }
}

#[test]
fn it_loads_default_config() {
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    assert_eq!(config.probe.count, 3);
    assert_eq!(config.probe.jitter_range(), (0.1, 1.5));
    assert_eq!(config.probe.interval, 300);
    assert!(config.topology.is_none());
}

#[test]
fn it_refuses_duplicate_addresses() {
    let mut topology = reference::three_tier().unwrap();
    let result = topology.add_device("h9", None, &["192.168.10.98"]);
    match result {
        Err(LoadError::DuplicateAddress { address, bound, requested }) => {
            assert_eq!(address, "192.168.10.98");
            assert_eq!(bound, "h7");
            assert_eq!(requested, "h9");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}
