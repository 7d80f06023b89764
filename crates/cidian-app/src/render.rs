use cidian_core::DisplayResult;
use cidian_favorites::FavoriteRecord;

pub fn print_results(results: &[DisplayResult], scores: bool) {
    if results.is_empty() {
        println!("No matches.");
        return;
    }

    for (i, result) in results.iter().enumerate() {
        let f = result.format();
        if scores {
            println!("{:>2}. {}  [{}]  {}  (score {})", i + 1, f.hanzi, f.pinyin, f.definitions, result.score);
        } else {
            println!("{:>2}. {}  [{}]  {}", i + 1, f.hanzi, f.pinyin, f.definitions);
        }
    }
}

pub fn print_favorites(records: &[FavoriteRecord]) {
    if records.is_empty() {
        println!("No favorites yet.");
        return;
    }

    for record in records {
        let hanzi = if record.simplified.is_empty() {
            &record.traditional
        } else {
            &record.simplified
        };
        println!(
            "{}  [{}]  {}  ({})",
            hanzi,
            record.pinyin.join(" / "),
            record.definitions.join("; "),
            record.key
        );
    }
}
