mod common;
use common::{run_cli, Fixture, FOUNDERS, PEDIGREE};
use pretty_assertions::assert_eq;

use zrhc_io::record::HAPLOTYPES_PREFIX;

const LENGTH: usize = 50;

/// Write the pedigree, and generate `original.txt` out of it.
fn generate(fixture: &Fixture, seed: &str) {
    let pedigree = fixture.write("family.ped", PEDIGREE);
    run_cli(&[
        "generate",
        "--pedigree", &pedigree.display().to_string(),
        "--output", &fixture.arg("original.txt"),
        "--genotype-length", &LENGTH.to_string(),
        "--missing-genotype-probability", "0.2",
        "--seed", seed,
    ]).expect("Generation should succeed");
}

/// Mimic a perfect solver, by extracting the ground-truth haplotypes of the generated file.
/// `transform` is applied to the phased loci of each record, given its identifier.
fn solve<F>(fixture: &Fixture, transform: F) -> String
where F: Fn(&str, &str) -> String
{
    fixture.read("original.txt").lines()
        .filter_map(|line| line.strip_prefix(HAPLOTYPES_PREFIX))
        .map(|record| {
            let fields: Vec<&str> = record.trim_start_matches('\t').split('\t').collect();
            let (columns, loci) = fields.split_at(6);
            let loci: Vec<String> = loci.iter().map(|locus| transform(columns[1], locus)).collect();
            format!("{}\t{}\n", columns.join("\t"), loci.join("\t"))
        })
        .collect()
}

fn evaluate(fixture: &Fixture, extra: &[&str]) -> anyhow::Result<String> {
    let mut args = vec![
        "evaluate".to_string(),
        "--original".to_string(), fixture.arg("original.txt"),
        "--result".to_string(), fixture.arg("result.txt"),
        "--output".to_string(), fixture.arg("report.tsv"),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    run_cli(&args.iter().map(String::as_str).collect::<Vec<_>>())?;
    Ok(fixture.read("report.tsv"))
}

/// Error columns of every per-individual row: (id, [err_gen, err_pat, err_mat, err_mask_pat, err_mask_mat])
fn individual_errors(report: &str) -> Vec<(String, Vec<usize>)> {
    report.lines()
        .filter(|line| !line.starts_with('"'))
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            let errors = fields[9..14].iter().map(|f| f.parse::<usize>().expect("Integer error count")).collect();
            (fields[2].to_string(), errors)
        })
        .collect()
}

#[test]
fn generated_file_layout() {
    let fixture = Fixture::new();
    generate(&fixture, "42");

    let original = fixture.read("original.txt");
    let lines: Vec<&str> = original.lines().collect();
    assert_eq!(lines.len(), 12);
    for (line, id) in lines[..6].iter().zip(1..) {
        assert!(line.starts_with(&format!("{HAPLOTYPES_PREFIX}\tFAM\t{id}\t")), "{line}");
        assert_eq!(line.split('\t').count(), 7 + LENGTH);
    }
    for (line, id) in lines[6..].iter().zip(1..) {
        assert!(line.starts_with(&format!("FAM\t{id}\t")), "{line}");
        assert_eq!(line.split('\t').count(), 6 + LENGTH);
    }
    assert!(lines[11].starts_with("FAM\t6\t3\t4\t1\taffected\t"));
    assert!(lines[7].starts_with("FAM\t2\t0\t0\t2\tphenotype\t"));
}

#[test]
fn generation_is_reproducible() {
    let (first, second) = (Fixture::new(), Fixture::new());
    generate(&first, "122295");
    generate(&second, "122295");
    assert_eq!(first.read("original.txt"), second.read("original.txt"));
}

#[test]
fn perfect_result() -> anyhow::Result<()> {
    let fixture = Fixture::new();
    generate(&fixture, "7");
    fixture.write("result.txt", &solve(&fixture, |_, locus| locus.to_string()));

    let report = evaluate(&fixture, &["--full-stats", "--show-header", "--expensive-checks"])?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("\"input file\"\t\"result file\"\t\"individual id\""));
    for (id, errors) in individual_errors(&report) {
        assert_eq!(errors, vec![0; 5], "individual {id}");
    }
    for line in &lines[1..] {
        assert_eq!(line.split('\t').nth(5), Some(LENGTH.to_string().as_str()));
    }

    let summary = evaluate(&fixture, &[])?;
    let fields: Vec<&str> = summary.trim_end().split('\t').collect();
    assert_eq!(fields.len(), 17);
    assert_eq!(fields[2], "6");
    assert_eq!(fields[3], (6 * LENGTH).to_string());
    assert_eq!(&fields[7..], &["0"; 10]);
    Ok(())
}

#[test]
fn swapped_founders_are_normalized() -> anyhow::Result<()> {
    let fixture = Fixture::new();
    generate(&fixture, "11");
    let swap_founders = |id: &str, locus: &str| match FOUNDERS.contains(&id) {
        true  => locus.chars().rev().collect(),
        false => locus.to_string(),
    };
    fixture.write("result.txt", &solve(&fixture, swap_founders));

    let report = evaluate(&fixture, &["--full-stats"])?;
    assert!(individual_errors(&report).iter().all(|(_, errors)| errors.iter().all(|e| *e == 0)));

    let report = evaluate(&fixture, &["--full-stats", "--dont-normalize-founders"])?;
    for (id, errors) in individual_errors(&report) {
        assert_eq!(errors[0], 0, "individual {id}: swapping never changes genotypes");
        assert_eq!(errors[1] > 0, FOUNDERS.contains(&id.as_str()), "individual {id}");
    }
    Ok(())
}

#[test]
fn inconsistent_result_is_rejected() {
    let fixture = Fixture::new();
    generate(&fixture, "3");
    let result: String = solve(&fixture, |_, locus| locus.to_string()).lines()
        .filter(|line| !line.starts_with("FAM\t6\t"))
        .map(|line| format!("{line}\n"))
        .collect();
    fixture.write("result.txt", &result);

    assert!(evaluate(&fixture, &[]).is_err());
    assert!(!fixture.path("report.tsv").exists());
}

#[test]
fn non_inherited_result_fails_expensive_checks() {
    let fixture = Fixture::new();
    generate(&fixture, "5");
    // Swap every allele of individual 6: neither of its strands matches a parental strand anymore.
    fixture.write("result.txt", &solve(&fixture, |id, locus| match id {
        "6" => locus.chars().map(|c| match c { '1' => '2', '2' => '1', c => c }).collect(),
        _   => locus.to_string(),
    }));

    assert!(evaluate(&fixture, &[]).is_ok());
    assert!(evaluate(&fixture, &["--expensive-checks"]).is_err());
}

#[test]
fn rerun_from_yaml() {
    let fixture = Fixture::new();
    let pedigree = fixture.write("family.ped", PEDIGREE);
    let output   = fixture.arg("original.txt");
    let yaml     = fixture.arg("args.yaml");
    run_cli(&["generate", "-p", &pedigree.display().to_string(), "-o", &output, "-l", "20", "--dump-args", &yaml])
        .expect("Generation should succeed");
    let first = fixture.read("original.txt");

    std::fs::remove_file(&output).expect("Failed to remove generated file");
    run_cli(&["from-yaml", &yaml]).expect("Re-running from yaml should succeed");
    assert_eq!(fixture.read("original.txt"), first);
}
