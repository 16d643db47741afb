// Lists offers for Liverpool home games against Wolverhampton/Wolves.
use offer_check::filter::{select_matches, VenuePairQuery};
use offer_check::loader::load_records;
use offer_check::render::render_matches;
use std::io;
use std::process;
use tracing::{error, info};

const OFFERS_CSV: &str = "data/p1-offers.csv";

fn main() {
    tracing_subscriber::fmt::init();

    // Optional fixture id argument; accepted but not used for filtering.
    if let Some(fixture_id) = std::env::args().nth(1) {
        info!("Fixture id argument: {}", fixture_id);
    }

    let records = match load_records(OFFERS_CSV) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load {}: {}", OFFERS_CSV, e);
            process::exit(1);
        }
    };
    info!("Loaded {} offers", records.len());

    let query = VenuePairQuery::new("Liverpool", &["Wolverhampton", "Wolves"]);
    let matches = select_matches(&records, &query);

    if let Err(e) = render_matches(&matches, &mut io::stdout().lock()) {
        error!("Write error: {}", e);
        process::exit(1);
    }
}
