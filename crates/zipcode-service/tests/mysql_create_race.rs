use zipcode_core::{ZipCode, ZipCodeDirectory, ZipCodeRecord};
use zipcode_service::ZipCodeService;
use zipcode_storage::MySqlRepository;
use zipcode_test_infra::mysql::{MySqlServer, MysqlConfig};

const SCHEMA: &str = include_str!("../../zipcode-storage/ddl/mysql/zip_codes.sql");

fn record(city: &str) -> ZipCodeRecord {
    ZipCodeRecord {
        zip: ZipCode::new_unchecked("10001"),
        city: city.to_string(),
        county: "New York".to_string(),
        state: "NY".to_string(),
        timezone: "EST".to_string(),
        kind: "STANDARD".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_against_mysql_elect_one_creator() {
    let mysql = MySqlServer::new(MysqlConfig::builder().build())
        .await
        .expect("start mysql");
    let pool = mysql.pool_with_schema(SCHEMA).await.expect("create schema");
    let service = ZipCodeService::new(MySqlRepository::new(pool));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.create(record(&format!("city-{i}"))).await })
        })
        .collect();

    let mut outcomes = vec![];
    for handle in handles {
        outcomes.push(handle.await.unwrap().expect("create"));
    }

    assert_eq!(outcomes.iter().filter(|o| o.created).count(), 1);
    let stored = service
        .find_by_id(&ZipCode::new_unchecked("10001"))
        .await
        .unwrap();
    assert!(outcomes.iter().all(|o| o.record == stored));
    assert_eq!(service.count_all().await.unwrap(), 1);
}
