// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use teachers::domain::models::teacher::Teacher;
use teachers::domain::repositories::teacher_repository::TeacherRepository;
use teachers::infrastructure::database::entities::teacher as teacher_entity;
use teachers::infrastructure::repositories::teacher_repo_impl::TeacherRepositoryImpl;
use uuid::Uuid;

fn sample(name: &str) -> Teacher {
    Teacher::new(
        name.to_string(),
        Some(format!("{} teaches maths", name)),
        format!("{}@school.test", name.to_lowercase()),
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        None,
    )
}

/// 测试创建后按ID读取
///
/// 验证写入时生成ID，且读取结果与写入内容一致
#[tokio::test]
async fn test_create_then_find_by_id() {
    let repo = TeacherRepositoryImpl::new(create_test_db().await);

    let created = repo.create(&sample("Ana")).await.unwrap();
    let id = created.id.expect("repository should assign an id");

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.description.as_deref(), Some("Ana teaches maths"));
}

#[tokio::test]
async fn test_create_ignores_caller_supplied_id() {
    let repo = TeacherRepositoryImpl::new(create_test_db().await);
    let supplied = Uuid::new_v4();

    let created = repo.create(&sample("Ana").with_id(supplied)).await.unwrap();

    assert_ne!(created.id, Some(supplied));
    assert!(repo.find_by_id(supplied).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_on_empty_table() {
    let repo = TeacherRepositoryImpl::new(create_test_db().await);

    let teachers = repo.find_all().await.unwrap();

    assert!(teachers.is_empty());
}

/// 测试批量创建
///
/// 验证批量写入返回数量，且每条记录都有独立ID
#[tokio::test]
async fn test_create_many_persists_whole_batch() {
    let db = create_test_db().await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    let count = repo
        .create_many(&[sample("Ana"), sample("Bea"), sample("Cid")])
        .await
        .unwrap();
    assert_eq!(count, 3);

    let rows = teacher_entity::Entity::find().count(db.as_ref()).await.unwrap();
    assert_eq!(rows, 3);

    let teachers = repo.find_all().await.unwrap();
    let names: Vec<&str> = teachers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bea", "Cid"]);
    assert!(teachers[0].id != teachers[1].id && teachers[1].id != teachers[2].id);
}

/// 测试大批量创建
///
/// 验证超过单条语句绑定参数上限的批量写入仍然完整落库
#[tokio::test]
async fn test_create_many_large_batch() {
    let db = create_test_db().await;
    let repo = TeacherRepositoryImpl::new(db.clone());
    let batch: Vec<Teacher> = (0..7500).map(|i| sample(&format!("T{:05}", i))).collect();

    let count = repo.create_many(&batch).await.unwrap();
    assert_eq!(count, 7500);

    let rows = teacher_entity::Entity::find().count(db.as_ref()).await.unwrap();
    assert_eq!(rows, 7500);
}

#[tokio::test]
async fn test_create_many_with_empty_batch() {
    let repo = TeacherRepositoryImpl::new(create_test_db().await);

    assert_eq!(repo.create_many(&[]).await.unwrap(), 0);
    assert!(repo.find_all().await.unwrap().is_empty());
}

/// 测试更新
///
/// 验证更新整体替换字段并保留ID，未知ID不会新建记录
#[tokio::test]
async fn test_update_existing_and_unknown() {
    let repo = TeacherRepositoryImpl::new(create_test_db().await);
    let created = repo.create(&sample("Ana")).await.unwrap();
    let id = created.id.unwrap();

    let replacement = Teacher::new(
        "Ana Maria".to_string(),
        None,
        "ana.maria@school.test".to_string(),
        NaiveDate::from_ymd_opt(1981, 5, 6).unwrap(),
        None,
    );
    let updated = repo.update(id, &replacement).await.unwrap().unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.description, None);
    assert_eq!(repo.find_by_id(id).await.unwrap(), Some(updated));

    let unknown = repo.update(Uuid::new_v4(), &replacement).await.unwrap();
    assert!(unknown.is_none());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

/// 测试删除
///
/// 验证删除返回删除前的状态，再次删除返回空
#[tokio::test]
async fn test_delete_returns_prior_state() {
    let repo = TeacherRepositoryImpl::new(create_test_db().await);
    let created = repo.create(&sample("Ana")).await.unwrap();
    let id = created.id.unwrap();

    let deleted = repo.delete(id).await.unwrap();
    assert_eq!(deleted, Some(created));

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(repo.delete(id).await.unwrap().is_none());
}
