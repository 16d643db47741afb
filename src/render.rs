// Plain-text rendering of a match list.
use crate::model::MatchList;
use std::io::{self, Write};

/// Writes the count summary followed by one labeled block per matched record.
/// An empty list still gets the count line. The count line grammar is
/// unconditional ("Found 1 matches"), matching the historical output.
pub fn render_matches(matches: &MatchList, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Found {} matches\n", matches.len())?;
    for (i, m) in matches.iter().enumerate() {
        writeln!(out, "Match {}:", i + 1)?;
        writeln!(out, "  Home: {}", m.get("home_team_name"))?;
        writeln!(out, "  Away: {}", m.get("away_team_name"))?;
        writeln!(out, "  Date: {}", m.get("date_start"))?;
        writeln!(out, "  productURL: {}", m.get("productURL"))?;
        writeln!(out, "  price: {}", m.get("price"))?;
        writeln!(out)?;
    }
    Ok(())
}
