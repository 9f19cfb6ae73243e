use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pox_loose_semver::{Comparator, Semver, Version, VersionParser};

fn bench_parse_versions(c: &mut Criterion) {
    let parser = VersionParser::new();
    let versions = [
        "v1.2.3",
        "1.2.3.4",
        "1.2.3-beta.1",
        "1.2.x-dev",
        "dev-master",
        "1.2.3-rc1",
        "1.2.3-pl1",
        "1.2.3.4_RC2",
        "1.2.3-foo",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parser.parse_version(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_constraints(c: &mut Criterion) {
    let parser = VersionParser::new();
    let constraints = [
        ">=1.2.3,<2.0.0",
        "^1.2.3|~2.4",
        "1.2.*|2.*",
        "~1.2.1,>=1.2.3",
        "!=1.5.0,!=1.5.1",
        ">1.0,<3.0|>=4.0",
        "dev-master|!dev-develop",
    ];

    c.bench_function("parse_constraints", |b| {
        b.iter(|| {
            for constraint in constraints {
                black_box(parser.parse_constraints(black_box(constraint)).ok());
            }
        })
    });
}

fn bench_comparator(c: &mut Criterion) {
    let pairs: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("1.2.*", "1.2.9"),
        ("1.2", "1.2.0"),
        ("dev-master", "dev-feature"),
        ("1.2.3.4", "1.2.3.5"),
    ]
    .iter()
    .map(|(a, b)| (Version::parse(a).expect("operand"), Version::parse(b).expect("candidate")))
    .collect();

    c.bench_function("comparator", |b| {
        b.iter(|| {
            for (operand, candidate) in &pairs {
                black_box(Comparator::equal(black_box(operand), black_box(candidate)));
                black_box(Comparator::higher(black_box(operand), black_box(candidate)));
                black_box(Comparator::tilde(black_box(operand), black_box(candidate)));
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3,<2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("dev-master", "dev-master"),
        ("1.2.3", "1.2.*|2.*"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, constraint) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(constraint)));
            }
        })
    });
}

fn bench_satisfies_parsed(c: &mut Criterion) {
    let cases = [
        "1.2.3",
        "1.2.3-beta",
        "2.4.5",
        "1.9999.9999",
        "dev-master",
        "1.9.0",
        "2.0.0",
    ];

    let parsed = Semver::parse_constraints("^1.2").expect("parse constraints");

    c.bench_function("semver_satisfies_parsed", |b| {
        b.iter(|| {
            for version in cases {
                black_box(Semver::satisfies_parsed(black_box(version), black_box(&parsed)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_versions,
    bench_parse_constraints,
    bench_comparator,
    bench_satisfies,
    bench_satisfies_parsed
);
criterion_main!(benches);
