// benches/recover.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use shot_scrape::core::tables::{to_dataset, Duplicates, TableIndex};
use shot_scrape::specs::shooting;
use shot_scrape::config::options::SourceOptions;

/// A saved page if one is around, else a synthetic one of similar shape:
/// many visible tables plus the shooting table hidden in a comment.
fn load_sample() -> String {
    std::fs::read_to_string(".ignore/page_samples/player.html").unwrap_or_else(|_| synthetic(40, 12))
}

fn synthetic(tables: usize, seasons: usize) -> String {
    let row = |season: &str| {
        let mut r = format!("<tr><th data-stat=\"year_id\">{season}</th>");
        for i in 1..25 { r.push_str(&format!("<td data-stat=\"c{i}\">{i}.5</td>")); }
        r.push_str("</tr>");
        r
    };
    let head: String = (0..25).map(|i| format!("<th>h{i}</th>")).collect();
    let body: String = (0..seasons).map(|i| row(&format!("20{:02}-20{:02}", i + 10, i + 11))).collect();

    let mut doc = String::from("<html><body>");
    for t in 0..tables {
        doc.push_str(&format!(
            "<div class=\"table_wrapper\"><table id=\"stats_{t}\"><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></div>"
        ));
        doc.push_str("<!-- <div class=\"note\">stat notes</div> -->");
    }
    doc.push_str(&format!(
        "<div id=\"all_stats_shooting\"><!--\n<table id=\"stats_shooting_dom_lg\"><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>\n--></div>"
    ));
    doc.push_str("</body></html>");
    doc
}

fn bench_recover(c: &mut Criterion) {
    let doc = load_sample();
    let source = SourceOptions::default();

    c.bench_function("index_build", |b| {
        b.iter(|| {
            let ix = TableIndex::build(black_box(&doc), Duplicates::FirstWins);
            black_box(ix.len())
        })
    });

    c.bench_function("index_and_dataset", |b| {
        b.iter(|| {
            let ix = TableIndex::build(black_box(&doc), Duplicates::FirstWins);
            let rows = ix.get(&source.table_id).and_then(|t| to_dataset(t.markup)).map(|d| d.row_count());
            black_box(rows)
        })
    });

    c.bench_function("extract_shooting", |b| {
        b.iter(|| {
            let ds = shooting::extract(black_box(&doc), &source);
            black_box(ds.map(|d| d.row_count()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_recover);
criterion_main!(benches);
