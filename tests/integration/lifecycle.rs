use chrono::Duration;
use std::sync::Arc;
use tempfile::TempDir;
use visitor_counter_application::{
    ports::{JobRegistry, SchemaManager, SystemClock},
    services::CountFormatter,
    use_cases::{
        CountVisitorsUseCase, InstallUseCase, PurgeStaleVisitsUseCase, RecordVisitUseCase,
        UninstallUseCase,
    },
};
use visitor_counter_domain::{config::DatabaseConfig, DomainError, PURGE_JOB_NAME};
use visitor_counter_infrastructure::{
    create_pool,
    database::{SqliteSchemaManager, TableNames},
    repositories::{
        job_registry_repository::SqliteJobRegistry, visit_repository::SqliteVisitRepository,
    },
};

struct Site {
    _dir: TempDir,
    schema: Arc<SqliteSchemaManager>,
    registry: Arc<SqliteJobRegistry>,
    install: InstallUseCase,
    uninstall: UninstallUseCase,
    record: Arc<RecordVisitUseCase>,
    count: CountVisitorsUseCase,
    purge: PurgeStaleVisitsUseCase,
}

async fn open_site() -> Site {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("visitors.db");
    let cfg = DatabaseConfig {
        path: path.to_string_lossy().into_owned(),
        ..DatabaseConfig::default()
    };
    let pool = create_pool(&format!("sqlite:{}", cfg.path), &cfg)
        .await
        .unwrap();

    let tables = TableNames::new(&cfg.table_prefix).unwrap();
    let registry = Arc::new(SqliteJobRegistry::new(pool.clone(), &tables));
    registry.ensure_table().await.unwrap();
    let schema = Arc::new(SqliteSchemaManager::new(pool.clone(), tables.clone()));
    let visits = Arc::new(SqliteVisitRepository::new(pool, &tables));
    let clock = Arc::new(SystemClock);

    Site {
        _dir: dir,
        install: InstallUseCase::new(schema.clone(), registry.clone(), 86_400),
        uninstall: UninstallUseCase::new(schema.clone(), registry.clone()),
        record: Arc::new(RecordVisitUseCase::new(visits.clone())),
        count: CountVisitorsUseCase::new(
            visits.clone(),
            clock.clone(),
            Arc::new(CountFormatter::new("en-US").unwrap()),
        ),
        purge: PurgeStaleVisitsUseCase::new(visits, clock, Duration::days(30)),
        schema,
        registry,
    }
}

#[tokio::test]
async fn test_install_record_count_purge_uninstall() {
    let site = open_site().await;

    let first = site.install.execute().await.unwrap();
    let second = site.install.execute().await.unwrap();
    assert!(first.trigger_registered);
    assert!(!second.trigger_registered);
    assert!(site.registry.find(PURGE_JOB_NAME).await.unwrap().is_some());

    site.record.execute("203.0.113.1").await.unwrap();
    site.record.execute("203.0.113.1").await.unwrap();
    site.record.execute("2001:db8::7").await.unwrap();

    let now = site.count.execute(None).await.unwrap();
    assert_eq!(now.value, 3);
    assert_eq!(site.count.execute(Some("month")).await.unwrap().value, 3);

    assert_eq!(site.purge.execute().await.unwrap(), 0);
    assert_eq!(site.count.execute(Some("now")).await.unwrap().value, 3);

    let removed = site.uninstall.execute().await.unwrap();
    assert!(removed.trigger_removed);
    assert!(!site.schema.tables_exist().await.unwrap());
    assert!(site.registry.find(PURGE_JOB_NAME).await.unwrap().is_none());

    let err = site.count.execute(None).await.unwrap_err();
    assert!(matches!(err, DomainError::DatabaseError(_)));
}

#[tokio::test]
async fn test_unknown_window_never_reaches_storage() {
    let site = open_site().await;

    // Not installed: any storage access would fail.
    let err = site.count.execute(Some("fortnight")).await.unwrap_err();
    match err {
        DomainError::UnknownWindow(e) => {
            assert_eq!(e.valid_options, vec!["day", "hour", "month", "now", "week"]);
        }
        other => panic!("expected UnknownWindow, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_recording() {
    let site = open_site().await;
    site.install.execute().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..25 {
        let record = site.record.clone();
        handles.push(tokio::spawn(async move {
            record.execute(&format!("10.0.0.{}", i)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(site.count.execute(Some("hour")).await.unwrap().value, 25);
}

#[tokio::test]
async fn test_reinstall_after_uninstall_starts_empty() {
    let site = open_site().await;
    site.install.execute().await.unwrap();
    site.record.execute("198.51.100.2").await.unwrap();

    site.uninstall.execute().await.unwrap();
    let outcome = site.install.execute().await.unwrap();

    assert!(outcome.trigger_registered);
    assert_eq!(site.count.execute(None).await.unwrap().value, 0);
}
