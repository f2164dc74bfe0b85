//! 成绩服务集成测试
//!
//! 使用真实 PostgreSQL 测试播种 / 查询 / 更新的完整流程。
//! 排序、所有权谓词和唯一约束都依赖真实 SQL 行为，无法通过纯 mock 覆盖，
//! 因此需要集成测试。
//!
//! ## 运行方式
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test grade_flow_test -- --ignored
//! ```

use std::sync::Arc;

use grade_service::error::GradeError;
use grade_service::models::GradeUpdate;
use grade_service::repository::{CatalogRepository, GradeRepository};
use grade_service::service::GradeService;
use sqlx::PgPool;

// ==================== 辅助函数 ====================

/// 从环境变量读取数据库 URL，未设置则 panic
fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests")
}

/// 连接数据库并执行迁移
async fn setup_pool() -> PgPool {
    let pool = PgPool::connect(&database_url())
        .await
        .expect("数据库连接失败");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("执行迁移失败");
    pool
}

fn setup_service(pool: &PgPool) -> GradeService<CatalogRepository, GradeRepository> {
    GradeService::new(
        Arc::new(CatalogRepository::new(pool.clone())),
        Arc::new(GradeRepository::new(pool.clone())),
    )
}

/// 每次运行生成不同的学生 ID，避免唯一约束跨运行冲突
fn unique_student(prefix: &str) -> String {
    format!(
        "{}-{}",
        prefix,
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

/// 插入测试用学位（幂等，已存在则更新名称）
async fn seed_test_degree(pool: &PgPool, degree_id: i64, name: &str) {
    sqlx::query(
        r#"
        INSERT INTO degrees (id, name, duration_years, total_credits)
        VALUES ($1, $2, 3, 360)
        ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
        "#,
    )
    .bind(degree_id)
    .bind(name)
    .execute(pool)
    .await
    .expect("插入测试学位失败");
}

/// 插入一个测试模块（幂等）
async fn seed_test_module(pool: &PgPool, module_id: i64, degree_id: i64, year: i32, semester: i32) {
    sqlx::query(
        r#"
        INSERT INTO modules (id, degree_id, code, name, credits, semester, year, category, is_gpa)
        VALUES ($1, $2, $3, $4, 10, $5, $6, 'core', TRUE)
        ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
        "#,
    )
    .bind(module_id)
    .bind(degree_id)
    .bind(format!("IT{}", module_id))
    .bind(format!("IntegTest Module {}", module_id))
    .bind(semester)
    .bind(year)
    .execute(pool)
    .await
    .expect("插入测试模块失败");
}

/// 两个模块的测试学位：module 99910 (year1 sem1)、99911 (year1 sem2)
async fn ensure_two_module_degree(pool: &PgPool) -> i64 {
    let degree_id = 99901;
    seed_test_degree(pool, degree_id, "IntegTest B.Sc CS").await;
    seed_test_module(pool, 99910, degree_id, 1, 1).await;
    seed_test_module(pool, 99911, degree_id, 1, 2).await;
    degree_id
}

// ==================== 测试 ====================

/// 未播种的学生查成绩返回空列表，不是错误
#[tokio::test]
#[ignore] // 需要数据库连接
async fn test_fetch_before_seeding_is_empty() {
    let pool = setup_pool().await;
    let service = setup_service(&pool);

    let grades = service
        .student_grades(&unique_student("never-seeded"))
        .await
        .expect("查询不应失败");
    assert!(grades.is_empty());
}

/// 完整流程：播种 → 排序 → 本人更新 → 他人更新被拒 → 重复播种被拒
#[tokio::test]
#[ignore] // 需要数据库连接
async fn test_seed_update_fetch_flow() {
    let pool = setup_pool().await;
    let service = setup_service(&pool);
    let degree_id = ensure_two_module_degree(&pool).await;
    let student = unique_student("s1");

    // 播种：两个模块产出两行，初始未评分
    let inserted = service
        .initialize_grades(&student, degree_id)
        .await
        .expect("播种失败");
    assert_eq!(inserted, 2);

    let grades = service.student_grades(&student).await.expect("查询失败");
    assert_eq!(grades.len(), 2);
    for grade in &grades {
        assert_eq!(grade.record.student_id, student);
        assert_eq!(grade.record.grade, None);
        assert_eq!(grade.record.grade_point, 0.0);
        assert!(!grade.record.is_completed);
        assert!(!grade.record.is_repeat);
    }

    // 排序：year1 sem1 的模块在前
    assert_eq!(grades[0].module.id, 99910);
    assert_eq!(grades[1].module.id, 99911);

    // 本人更新 module 99910 对应的行：四个字段原样持久化
    let target_id = grades[0].record.id;
    service
        .update_grade(
            &student,
            target_id,
            GradeUpdate {
                grade: Some("B+".to_string()),
                grade_point: 3.3,
                is_completed: true,
                is_repeat: false,
            },
        )
        .await
        .expect("本人更新失败");

    let grades = service.student_grades(&student).await.expect("查询失败");
    assert_eq!(grades[0].record.id, target_id);
    assert_eq!(grades[0].record.grade.as_deref(), Some("B+"));
    assert_eq!(grades[0].record.grade_point, 3.3);
    assert!(grades[0].record.is_completed);
    assert!(!grades[0].record.is_repeat);
    // 第二行未被波及
    assert_eq!(grades[1].record.grade, None);

    // 他人即使猜中 grade_id 也无法更新
    let intruder = unique_student("intruder");
    let err = service
        .update_grade(
            &intruder,
            target_id,
            GradeUpdate {
                grade: Some("F".to_string()),
                grade_point: 0.0,
                is_completed: false,
                is_repeat: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GradeError::UpdateRejected));

    // 目标行保持不变
    let grades = service.student_grades(&student).await.expect("查询失败");
    assert_eq!(grades[0].record.grade.as_deref(), Some("B+"));

    // 重复播种被拒
    let err = service
        .initialize_grades(&student, degree_id)
        .await
        .unwrap_err();
    assert!(matches!(err, GradeError::AlreadyInitialized));
    let grades = service.student_grades(&student).await.expect("查询失败");
    assert_eq!(grades.len(), 2, "重复播种不应产生新行");
}

/// 零模块学位播种失败且不产生任何行
#[tokio::test]
#[ignore] // 需要数据库连接
async fn test_seed_empty_degree_fails() {
    let pool = setup_pool().await;
    let service = setup_service(&pool);
    let degree_id = 99902;
    seed_test_degree(&pool, degree_id, "IntegTest Empty Degree").await;
    let student = unique_student("s-empty");

    let err = service
        .initialize_grades(&student, degree_id)
        .await
        .unwrap_err();
    assert!(matches!(err, GradeError::DegreeHasNoModules(_)));

    let grades = service.student_grades(&student).await.expect("查询失败");
    assert!(grades.is_empty(), "失败的播种不应留下任何行");
}

/// 同学年同学期的并列按记录 ID 升序，排序确定
#[tokio::test]
#[ignore] // 需要数据库连接
async fn test_ordering_tie_break_is_deterministic() {
    let pool = setup_pool().await;
    let service = setup_service(&pool);
    let degree_id = 99903;
    seed_test_degree(&pool, degree_id, "IntegTest Tie Degree").await;
    // 两个模块同为 year1 sem1
    seed_test_module(&pool, 99930, degree_id, 1, 1).await;
    seed_test_module(&pool, 99931, degree_id, 1, 1).await;
    let student = unique_student("s-tie");

    service
        .initialize_grades(&student, degree_id)
        .await
        .expect("播种失败");

    let grades = service.student_grades(&student).await.expect("查询失败");
    assert_eq!(grades.len(), 2);
    assert!(
        grades[0].record.id < grades[1].record.id,
        "并列时按记录 ID 升序"
    );
}

/// 课程目录查询：模块按学年、学期排序返回
#[tokio::test]
#[ignore] // 需要数据库连接
async fn test_catalog_queries() {
    let pool = setup_pool().await;
    let service = setup_service(&pool);
    let degree_id = ensure_two_module_degree(&pool).await;

    let degrees = service.list_degrees().await.expect("学位列表查询失败");
    assert!(degrees.iter().any(|d| d.id == degree_id));

    let modules = service
        .list_degree_modules(degree_id)
        .await
        .expect("模块列表查询失败");
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].id, 99910);

    // 不存在的学位报 NotFound
    let err = service.list_degree_modules(88888888).await.unwrap_err();
    assert!(matches!(err, GradeError::NotFound(_)));
}
