//! End-to-end batch ranking: reference file + candidate upload -> ranked
//! workbook, read back with calamine.

use std::path::{Path, PathBuf};

use anode_app::app::{PredictionOptions, PredictionService};
use anode_app::config::Config;
use anode_app::export::{
    export_candidate_template, export_evaluation_to_excel, export_predictions_to_excel, TEMPLATE_FILE_NAME,
};
use anode_app::logging;
use anode_app::repository::open_candidates;
use anode_domain::model::{Composition, MaterialPrices};
use anode_domain::service::{compute_unit_cost, generate_ranking_report};
use anode_types::{CostMode, Error};
use calamine::{open_workbook, Data, Reader, Xlsx};
use tempfile::TempDir;

const REFERENCE: &str = "Lot;RRO2;RRCO2;AP;TC;NAC\n\
                         AGA;85,1;90,4;1,02;4,25;400\n\
                         AJA;84,7;89,9;1,10;4,18;415\n\
                         WGA;86,3;91,2;0,98;4,31;392\n\
                         WJA;85,9;90,8;1,05;4,22;\n";

const CANDIDATES: &str = "Jenis,Lot,Source,Price\n\
                          CPC-HS,A,Src1,1000\n\
                          CPC-HS,W,Src4,980\n\
                          CPC-LS,G,Src2,1200\n\
                          CPC-LS,J,Src5,1180\n\
                          CPC-LS,S,Src6,1250\n\
                          CTP,A,Src3,1500\n";

fn workspace() -> (TempDir, Config) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let reference = dir.path().join("prediksi_material_nac.csv");
    std::fs::write(&reference, REFERENCE).expect("Failed to write reference");
    let config = Config {
        reference_path: Some(reference),
        ..Config::default()
    };
    (dir, config)
}

fn write_candidates(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("candidates.csv");
    std::fs::write(&path, body).expect("Failed to write candidates");
    path
}

fn composition() -> Composition {
    Composition::new(70.0, 30.0, 14.0, 30.0)
}

fn read_predictions(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    let range = workbook
        .worksheet_range("Predictions")
        .expect("Predictions sheet missing");
    range.rows().skip(1).map(|r| r.to_vec()).collect()
}

fn number(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn test_batch_ranking_end_to_end() {
    logging::init_test();
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(dir.path(), CANDIDATES);

    let evaluation = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .expect("Ranking failed");

    // 2 HS x 3 LS x 1 CTP = 6; ASA/WSA have no record, WJA has no NAC
    assert_eq!(evaluation.evaluated(), 6);
    assert_eq!(evaluation.results.len(), 3);
    assert_eq!(evaluation.skipped_with("metrics not found"), 2);
    assert_eq!(evaluation.skipped_with("missing NAC"), 1);
    assert!(evaluation.results.windows(2).all(|w| w[0].ratio >= w[1].ratio));

    for result in &evaluation.results {
        assert!((result.ratio - result.nac / result.cost).abs() < 1e-12);
    }

    let report = generate_ranking_report(&evaluation);
    assert!(report.contains("Ranked:                   3"));
}

#[test]
fn test_reference_example_single_combination() {
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(
        dir.path(),
        "Jenis,Lot,Source,Price\nCPC-HS,A,Src1,1000\nCPC-LS,G,Src2,1200\nCTP,A,Src3,1500\n",
    );

    let evaluation = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .expect("Ranking failed");

    let expected_cost = compute_unit_cost(
        &composition(),
        &MaterialPrices::new(1000.0, 1200.0, 1500.0, 178.82),
        CostMode::Legacy,
    );
    assert_eq!(evaluation.results.len(), 1);
    let result = &evaluation.results[0];
    assert_eq!(result.cost, expected_cost);
    assert!((result.ratio - 400.0 / expected_cost).abs() < 1e-12);
    assert_eq!(result.hs_source, "A - Src1");
    assert_eq!(result.ls_source, "G - Src2");
    assert_eq!(result.ctp_source, "A - Src3");
}

#[test]
fn test_no_reference_record_gives_empty_ranking() {
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(
        dir.path(),
        "Jenis,Lot,Source,Price\nCPC-HS,M,Src1,1000\nCPC-LS,G,Src2,1200\nCTP,A,Src3,1500\n",
    );

    let evaluation = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .expect("Ranking failed");
    assert!(evaluation.results.is_empty());
    assert_eq!(evaluation.skipped.len(), 1);
}

#[test]
fn test_bad_price_only_skips_its_combinations() {
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(
        dir.path(),
        "Jenis,Lot,Source,Price\nCPC-HS,A,Src1,1000\nCPC-HS,W,Src4,tbd\nCPC-LS,G,Src2,1200\nCTP,A,Src3,1500\n",
    );

    let evaluation = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .expect("Ranking failed");
    assert_eq!(evaluation.results.len(), 1);
    assert_eq!(evaluation.results[0].key.lot(), "AGA");
    assert_eq!(evaluation.skipped_with("invalid price"), 1);
}

#[test]
fn test_schema_mismatch_fails_fast() {
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(dir.path(), "Jenis,Lot,Price\nCPC-HS,A,1000\n");

    let err = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .unwrap_err();
    match err {
        Error::SchemaMismatch { column, .. } => assert_eq!(column, "Source"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_reference_file_is_fatal() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        reference_path: Some(dir.path().join("absent.csv")),
        ..Config::default()
    };
    let err = PredictionService::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}

#[test]
fn test_export_round_trip() {
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(dir.path(), CANDIDATES);
    let evaluation = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .expect("Ranking failed");

    let output = dir.path().join("ranking.xlsx");
    export_predictions_to_excel(&evaluation.results, &output).expect("Export failed");

    let rows = read_predictions(&output);
    assert_eq!(rows.len(), evaluation.results.len());
    for (idx, (row, result)) in rows.iter().zip(&evaluation.results).enumerate() {
        assert_eq!(number(&row[0]) as usize, idx + 1);
        assert_eq!(row[1].to_string(), result.hs_source);
        assert_eq!(row[4].to_string(), result.key.lot());
        let expected = [
            result.rro2, result.rrco2, result.ap, result.tc, result.nac, result.cost, result.ratio,
        ];
        for (offset, value) in expected.iter().enumerate() {
            assert!((number(&row[5 + offset]) - value).abs() < 0.005);
        }
    }
}

#[test]
fn test_evaluation_export_has_skipped_sheet() {
    let (dir, config) = workspace();
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let upload = write_candidates(dir.path(), CANDIDATES);
    let evaluation = service
        .rank_file(&upload, &config, &composition(), 178.82)
        .expect("Ranking failed");

    let output = dir.path().join("evaluation.xlsx");
    export_evaluation_to_excel(&evaluation, &output).expect("Export failed");

    let mut workbook: Xlsx<_> = open_workbook(&output).expect("Failed to open workbook");
    assert_eq!(workbook.sheet_names(), vec!["Predictions".to_string(), "Skipped".to_string()]);
    let skipped = workbook.worksheet_range("Skipped").expect("Skipped sheet missing");
    assert_eq!(skipped.rows().count(), 1 + evaluation.skipped.len());
}

#[test]
fn test_template_loads_as_candidates() {
    let (dir, config) = workspace();
    let template = dir.path().join(TEMPLATE_FILE_NAME);
    export_candidate_template(&template).expect("Template export failed");

    let candidates = open_candidates(&template, &config).expect("Template did not load");
    assert_eq!(candidates.hs.len(), 1);
    assert_eq!(candidates.ls.len(), 1);
    assert_eq!(candidates.ctp.len(), 1);

    // A, G, A -> AGA exists in the reference table
    let service = PredictionService::from_config(&config).expect("Failed to open service");
    let evaluation = service
        .rank(&candidates, &composition(), 178.82)
        .expect("Ranking failed");
    assert_eq!(evaluation.results.len(), 1);
}

#[test]
fn test_ascending_option_reverses_order() {
    let (dir, config) = workspace();
    let store = PredictionService::from_config(&config)
        .expect("Failed to open service")
        .store()
        .clone();
    let service = PredictionService::new(
        store,
        PredictionOptions::from_config(&config).with_rank_order(anode_types::RankOrder::Ascending),
    );
    let candidates = open_candidates(&write_candidates(dir.path(), CANDIDATES), &config)
        .expect("Failed to load candidates");

    let evaluation = service
        .rank(&candidates, &composition(), 178.82)
        .expect("Ranking failed");
    assert!(evaluation.results.windows(2).all(|w| w[0].ratio <= w[1].ratio));
}
