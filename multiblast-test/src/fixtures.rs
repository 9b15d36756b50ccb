//! Test fixtures shared across the multiblast workspace

use indexmap::IndexMap;
use multiblast_bio::OrganismMaps;
use multiblast_core::{BlastTool, JobDetails, JobStatus, MultiQueryReport};
use serde_json::{json, Value};

pub const TWO_QUERY: &str = ">seq1 first query\nATGGCTAGCTAGCTAGGCTA\n>seq2 second query\nTTGACCGATCGATCGGGAAT\n";

/// Form values for `tool` as a user would submit them, with a few values
/// still carrying the form's default suffix
pub fn raw_param_values(tool: BlastTool) -> IndexMap<String, String> {
    let nucleotide = matches!(tool, BlastTool::Blastn | BlastTool::Tblastx | BlastTool::Blastx);
    let query = if nucleotide { TWO_QUERY } else { ">prot1\nMKVLAAGIVGLLLAQ\n" };

    let mut values: Vec<(&str, &str)> = vec![
        ("BlastAlgorithm", tool.as_str()),
        ("BlastQuerySequence", query),
        ("BlastDatabaseOrganism", r#"["Plasmodium falciparum 3D7","Plasmodium vivax P01"]"#),
        ("BlastDatabaseType", "Genome (default)"),
        ("JobDescription", "fixture job"),
        ("ExpectationValue", "10 (default)"),
        ("NumQueryResults", "50 (default)"),
        ("MaxMatchesQueryRange", "0"),
        ("SoftMask", "true"),
        ("LowerCaseMask", ""),
    ];

    match tool {
        BlastTool::Blastn => values.extend([
            ("WordSize", "11 (default)"),
            ("FilterLowComplex", "dust (default)"),
            ("GapCosts", "5,2 (default)"),
            ("MatchMismatchScore", "2,-3 (default)"),
        ]),
        BlastTool::Tblastx => values.extend([
            ("WordSize", "3 (default)"),
            ("ScoringMatrix", "BLOSUM62 (default)"),
            ("FilterLowComplex", "seg"),
        ]),
        _ => values.extend([
            ("WordSize", "3 (default)"),
            ("ScoringMatrix", "BLOSUM62 (default)"),
            ("CompAdjust", "Conditional compositional score matrix adjustment (default)"),
            ("FilterLowComplex", "no filter"),
            ("GapCosts", "11,1 (default)"),
        ]),
    }

    values
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn organism_maps() -> OrganismMaps {
    OrganismMaps::from_pairs([
        ("Pfalciparum3D7", "Plasmodium falciparum 3D7"),
        ("PvivaxP01", "Plasmodium vivax P01"),
        ("PbergheiANKA", "Plasmodium berghei ANKA"),
    ])
}

fn hsp(num: u32, evalue: f64, score: f64, identity: u64, query: (u64, u64), align_len: u64) -> Value {
    json!({
        "num": num,
        "bit_score": score * 1.85,
        "score": score,
        "evalue": evalue,
        "identity": identity,
        "query_from": query.0,
        "query_to": query.1,
        "hit_from": 1000 + query.0,
        "hit_to": 1000 + query.1,
        "align_len": align_len,
        "gaps": 0
    })
}

/// Two queries against two genomes.
///
/// Query 1 has three hits: two in P. falciparum (the first with two
/// overlapping HSPs) and one in P. vivax. Query 2 has one hit against the
/// same P. falciparum sequence as query 1's best hit.
pub fn two_query_report_json() -> Value {
    let db = "/var/blast/PlasmoDB/Pfalciparum3D7Genome /var/blast/PlasmoDB/PvivaxP01Genome";
    json!({
        "BlastOutput2": [
            {"report": {
                "program": "blastn",
                "version": "BLASTN 2.11.0+",
                "search_target": {"db": db},
                "results": {"search": {
                    "query_id": "Query_1",
                    "query_title": "seq1 first query",
                    "query_len": 200,
                    "hits": [
                        {
                            "num": 1,
                            "description": [{
                                "id": "Pf3D7_01_v3",
                                "accession": "Pf3D7_01_v3",
                                "title": "Pf3D7_01_v3 | organism=Plasmodium_falciparum_3D7 | length=640851 "
                            }],
                            "len": 640851,
                            "hsps": [
                                hsp(1, 1e-40, 180.0, 95, (1, 100), 100),
                                hsp(2, 1e-10, 60.0, 40, (80, 150), 71)
                            ]
                        },
                        {
                            "num": 2,
                            "description": [{
                                "id": "PvP01_05_v1",
                                "accession": "PvP01_05_v1",
                                "title": "PvP01_05_v1 | organism=Plasmodium_vivax_P01 | length=1370936 "
                            }],
                            "len": 1370936,
                            "hsps": [hsp(1, 1e-40, 190.0, 90, (11, 110), 100)]
                        },
                        {
                            "num": 3,
                            "description": [{
                                "id": "Pf3D7_14_v3",
                                "accession": "Pf3D7_14_v3",
                                "title": "Pf3D7_14_v3 | organism=Plasmodium_falciparum_3D7 | length=3291936 "
                            }],
                            "len": 3291936,
                            "hsps": [hsp(1, 0.5, 30.0, 20, (151, 200), 50)]
                        }
                    ]
                }}
            }},
            {"report": {
                "program": "blastn",
                "version": "BLASTN 2.11.0+",
                "search_target": {"db": db},
                "results": {"search": {
                    "query_id": "Query_2",
                    "query_title": "seq2 second query",
                    "query_len": 20,
                    "hits": [
                        {
                            "num": 1,
                            "description": [{
                                "id": "Pf3D7_01_v3",
                                "accession": "Pf3D7_01_v3",
                                "title": "Pf3D7_01_v3 | organism=Plasmodium_falciparum_3D7 | length=640851 "
                            }],
                            "len": 640851,
                            "hsps": [hsp(1, 1e-5, 40.0, 20, (1, 20), 20)]
                        }
                    ]
                }}
            }}
        ]
    })
}

pub fn two_query_report() -> MultiQueryReport {
    serde_json::from_value(two_query_report_json()).unwrap()
}

/// A stored blastn job, as returned by `GET /jobs/{id}`
pub fn job_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "description": "fixture job",
        "created": "2021-03-01T10:00:00Z",
        "expires": "2021-03-08T10:00:00Z",
        "site": "PlasmoDB",
        "targets": [
            {"organism": "Pfalciparum3D7", "target": "Pfalciparum3D7Genome"},
            {"organism": "PvivaxP01", "target": "PvivaxP01Genome"}
        ],
        "config": {
            "tool": "blastn",
            "task": "blastn",
            "query": TWO_QUERY,
            "eValue": "10",
            "numDescriptions": 50,
            "numAlignments": 50,
            "maxTargetSeqs": 50,
            "maxHSPs": 0,
            "wordSize": 11,
            "softMasking": true,
            "lcaseMasking": false,
            "gapOpen": 5,
            "gapExtend": 2,
            "dust": {"level": 20, "window": 64, "linker": 1},
            "reward": 2,
            "penalty": -3
        }
    })
}

pub fn job_details(id: &str, status: JobStatus) -> JobDetails {
    let status = serde_json::to_value(status).unwrap();
    serde_json::from_value(job_json(id, status.as_str().unwrap())).unwrap()
}

/// Job listing entry; `parent` makes it a sub-job of that job at that index
pub fn job_summary_json(id: &str, status: &str, parent: Option<(&str, u32)>) -> Value {
    let mut summary = json!({
        "id": id,
        "description": format!("job {}", id),
        "created": "2021-03-01T10:00:00Z",
        "expires": "2021-03-08T10:00:00Z",
        "status": status
    });
    if let Some((parent_id, index)) = parent {
        summary["isPrimary"] = json!(false);
        summary["parentJobs"] = json!([{"id": parent_id, "index": index}]);
    }
    summary
}
