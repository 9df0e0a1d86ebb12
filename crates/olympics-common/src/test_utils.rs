//! Test utilities and shared fixtures.
//!
//! The fixture dataset is a tiny but complete slice of the Olympic history
//! files: German rows from all three NOCs, a few foreign rows, and three rows
//! that cleaning must drop (unknown NOC, NOC without region, empty name).

use std::path::PathBuf;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Athlete events in the layout of `athlete_events.csv`.
///
/// | id | kept | notes |
/// |----|------|-------|
/// | 1-6, 18 | GER | 7 unified-Germany rows, Ski Jumping team gold shared by ids 4 and 5 |
/// | 7 | FRG | |
/// | 8-10 | GDR | Petra Lang appears twice |
/// | 11-14 | foreign | NOR, NOR, FIN, USA |
/// | 15 | dropped | NOC `XXX` has no region mapping |
/// | 16 | dropped | NOC `ROT` maps to an empty region |
/// | 17 | dropped | empty name |
pub const ATHLETE_EVENTS_CSV: &str = r#""ID","Name","Sex","Age","Height","Weight","Team","NOC","Games","Year","Season","City","Sport","Event","Medal"
"1","Anna Schmidt","F","24","168","60","Germany","GER","1996 Summer","1996","Summer","Atlanta","Swimming","Swimming Women's 100 metres Freestyle","Gold"
"2","Anna Schmidt","F","28","168","61","Germany","GER","2000 Summer","2000","Summer","Sydney","Swimming","Swimming Women's 100 metres Freestyle","Silver"
"3","Jens Weissflog","M","29","178","62","Germany","GER","1994 Winter","1994","Winter","Lillehammer","Ski Jumping","Ski Jumping Men's Large Hill, Individual","Gold"
"4","Jens Weissflog","M","29","178","62","Germany","GER","1994 Winter","1994","Winter","Lillehammer","Ski Jumping","Ski Jumping Men's Large Hill, Team","Gold"
"5","Dieter Thoma","M","24","180","64","Germany","GER","1994 Winter","1994","Winter","Lillehammer","Ski Jumping","Ski Jumping Men's Large Hill, Team","Gold"
"6","Klaus Becker","M","NA","NA","NA","Germany","GER","1994 Winter","1994","Winter","Lillehammer","Biathlon","Biathlon Men's 20 kilometres","NA"
"7","Hans Mueller","M","22","182","80","West Germany","FRG","1972 Summer","1972","Summer","Munich","Football","Football Men's Football","Bronze"
"8","Petra Lang","F","19","165","55","East Germany","GDR","1972 Summer","1972","Summer","Munich","Swimming","Swimming Women's 200 metres Backstroke","Gold"
"9","Petra Lang","F","23","165","55","East Germany","GDR","1976 Summer","1976","Summer","Montreal","Swimming","Swimming Women's 200 metres Backstroke","Silver"
"10","Uwe Braun","M","25","185","78","East Germany","GDR","1980 Winter","1980","Winter","Lake Placid","Biathlon","Biathlon Men's 20 kilometres","Bronze"
"11","Kari Nordmann","M","26","176","63","Norway","NOR","1994 Winter","1994","Winter","Lillehammer","Ski Jumping","Ski Jumping Men's Normal Hill, Individual","Silver"
"12","Ola Hansen","M","31","175","66","Norway","NOR","1994 Winter","1994","Winter","Lillehammer","Ski Jumping","Ski Jumping Men's Large Hill, Individual","NA"
"13","Mika Laine","M","21","177","61","Finland","FIN","1994 Winter","1994","Winter","Lillehammer","Ski Jumping","Ski Jumping Men's Normal Hill, Individual","NA"
"14","Jane Doe","F","27","170","58","United States","USA","1996 Summer","1996","Summer","Atlanta","Swimming","Swimming Women's 100 metres Freestyle","Bronze"
"15","Ghost Athlete","M","30","NA","NA","Unknown Team","XXX","1996 Summer","1996","Summer","Atlanta","Swimming","Swimming Men's 100 metres Freestyle","NA"
"16","Yiech Biel","M","21","NA","NA","Refugee Olympic Athletes","ROT","2016 Summer","2016","Summer","Rio de Janeiro","Athletics","Athletics Men's 800 metres","NA"
"17","","M","25","NA","NA","Germany","GER","2000 Summer","2000","Summer","Sydney","Swimming","Swimming Men's 100 metres Freestyle","NA"
"18","Sabine Koch","F","26","172","59","Germany","GER","2000 Summer","2000","Summer","Sydney","Swimming","Swimming Women's 200 metres Backstroke","NA"
"#;

/// NOC to region mapping in the layout of `noc_regions.csv`.
pub const NOC_REGIONS_CSV: &str = "NOC,region,notes
GER,Germany,
FRG,Germany,
GDR,Germany,
NOR,Norway,
FIN,Finland,
USA,USA,
ROT,,Refugee Olympic Team
";

/// Number of fixture rows that survive cleaning.
pub const CLEAN_ROW_COUNT: usize = 15;
/// Number of surviving rows with NOC GER, FRG or GDR.
pub const GERMANY_ALL_ROW_COUNT: usize = 11;
/// Number of surviving rows with NOC GER.
pub const GERMANY_ROW_COUNT: usize = 7;

/// Writes both fixture files into `dir` and returns `(athletes, regions)` paths.
pub fn write_fixture_files(dir: &std::path::Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let athletes = dir.join("athlete_events.csv");
    let regions = dir.join("noc_regions.csv");
    std::fs::write(&athletes, ATHLETE_EVENTS_CSV)?;
    std::fs::write(&regions, NOC_REGIONS_CSV)?;
    Ok((athletes, regions))
}

/// Creates a temporary directory holding both fixture files.
pub fn fixture_dir() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let (athletes, regions) =
        write_fixture_files(dir.path()).expect("Failed to write fixture files");
    (dir, athletes, regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let rows = ATHLETE_EVENTS_CSV.lines().count();
        assert_eq!(rows, 19); // header + 18 rows

        let regions = NOC_REGIONS_CSV.lines().count();
        assert_eq!(regions, 8);
    }

    #[test]
    fn test_fixture_dir_writes_files() {
        let (_dir, athletes, regions) = fixture_dir();
        assert!(athletes.exists());
        assert!(regions.exists());
    }

    #[test]
    #[should_panic(expected = "not approximately equal")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.5, 0.1);
    }
}
