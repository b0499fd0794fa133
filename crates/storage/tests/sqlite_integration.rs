use rankquiz_core::model::{Branch, CompletedRun, QuizStats, RunId};
use rankquiz_core::time::fixed_now;
use storage::repository::StatsRepository;
use storage::sqlite::SqliteRepository;

fn sample_stats() -> QuizStats {
    let mut stats = QuizStats::default();
    let run = CompletedRun::new(RunId::new(1), Branch::Navy, 19, 19, 45_000);
    stats.apply_run(&run, "ada", fixed_now());
    stats
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_payload() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let stats = sample_stats();
    let payload = serde_json::to_string(&stats).unwrap();
    repo.store(Branch::Navy, &payload).await.unwrap();

    let loaded = repo.load(Branch::Navy).await.unwrap().expect("payload");
    let back: QuizStats = serde_json::from_str(&loaded).unwrap();
    assert_eq!(back, stats);
}

#[tokio::test]
async fn absent_branch_loads_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_absent?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.load(Branch::Combined).await.unwrap(), None);
}

#[tokio::test]
async fn store_is_full_overwrite() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.store(Branch::Air, "{\"high_score\":3}").await.unwrap();
    repo.store(Branch::Air, "{\"high_score\":9}").await.unwrap();

    let loaded = repo.load(Branch::Air).await.unwrap().unwrap();
    assert_eq!(loaded, "{\"high_score\":9}");
}

#[tokio::test]
async fn delete_removes_record_and_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_delete?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.store(Branch::Army, "{}").await.unwrap();
    repo.delete(Branch::Army).await.unwrap();
    assert_eq!(repo.load(Branch::Army).await.unwrap(), None);

    // Deleting again must not fail.
    repo.delete(Branch::Army).await.unwrap();
}

#[tokio::test]
async fn migrations_are_rerunnable() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first run");
    repo.migrate().await.expect("second run");
}
