//! Behavioral checks every `QuestionRepository` adapter must pass.

use trivia_application::{QuestionRepository, RepositoryError};
use trivia_domain::{Category, CategoryId, NewQuestion, QuestionFilter, QuestionId, SearchTerm};

pub(crate) fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion::try_new(
        Some(text.to_string()),
        Some(format!("answer to {text}")),
        Some(2),
        Some(category),
    )
    .unwrap()
}

pub(crate) async fn run_all<R: QuestionRepository>(repo: &R) {
    starts_empty(repo).await;
    let ids = seed(repo).await;
    lists_in_insert_order(repo, &ids).await;
    filters_by_category(repo).await;
    searches_case_insensitively(repo).await;
    excludes_ids(repo, &ids).await;
    finds_by_id(repo, &ids).await;
    rejects_duplicate_category(repo).await;
    deletes_permanently(repo, &ids).await;
}

async fn starts_empty<R: QuestionRepository>(repo: &R) {
    assert!(repo.list_questions().await.unwrap().is_empty());
    assert!(repo.list_categories().await.unwrap().is_empty());
    assert_eq!(repo.count_questions(&QuestionFilter::new()).await.unwrap(), 0);
}

async fn seed<R: QuestionRepository>(repo: &R) -> Vec<QuestionId> {
    repo.insert_category(Category::new(2, "Art")).await.unwrap();
    repo.insert_category(Category::new(1, "Science")).await.unwrap();

    let mut ids = Vec::new();
    for (text, category) in [
        ("Hello world", 1),
        ("WORLDLY goods", 2),
        ("A word to the wise", 1),
        ("Is 100% of the école open?", 2),
        ("What is 100 percent?", 1),
    ] {
        ids.push(repo.insert_question(new_question(text, category)).await.unwrap());
    }
    ids
}

async fn lists_in_insert_order<R: QuestionRepository>(repo: &R, ids: &[QuestionId]) {
    let listed: Vec<QuestionId> = repo
        .list_questions()
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(listed, ids);

    let categories: Vec<i64> = repo
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id.value())
        .collect();
    assert_eq!(categories, vec![1, 2]);
}

async fn filters_by_category<R: QuestionRepository>(repo: &R) {
    let filter = QuestionFilter::new().in_category(CategoryId::new(1));
    let found = repo.find_questions(&filter).await.unwrap();
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|q| q.category == CategoryId::new(1)));
    assert_eq!(repo.count_questions(&filter).await.unwrap(), 3);

    let unknown = QuestionFilter::new().in_category(CategoryId::new(42));
    assert!(repo.find_questions(&unknown).await.unwrap().is_empty());
    assert_eq!(repo.count_questions(&unknown).await.unwrap(), 0);
}

async fn searches_case_insensitively<R: QuestionRepository>(repo: &R) {
    let texts = |term: &str| {
        let filter = QuestionFilter::new().matching(SearchTerm::parse(Some(term)).unwrap());
        async move {
            repo.find_questions(&filter)
                .await
                .unwrap()
                .into_iter()
                .map(|q| q.question)
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(texts("WORLD").await, vec!["Hello world", "WORLDLY goods"]);
    assert_eq!(texts("ÉCOLE").await, vec!["Is 100% of the école open?"]);
    assert_eq!(texts("100%").await, vec!["Is 100% of the école open?"]);
    assert!(texts("_").await.is_empty());
}

async fn excludes_ids<R: QuestionRepository>(repo: &R, ids: &[QuestionId]) {
    let filter = QuestionFilter::new()
        .in_category(CategoryId::new(1))
        .excluding([ids[0], ids[1]]);
    let found: Vec<QuestionId> = repo
        .find_questions(&filter)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(found, vec![ids[2], ids[4]]);
    assert_eq!(repo.count_questions(&filter).await.unwrap(), 2);
}

async fn finds_by_id<R: QuestionRepository>(repo: &R, ids: &[QuestionId]) {
    let question = repo.find_question(ids[0]).await.unwrap().unwrap();
    assert_eq!(question.question, "Hello world");
    assert_eq!(question.answer, "answer to Hello world");
    assert_eq!(question.difficulty, 2);
    assert!(repo.find_question(QuestionId::new(9999)).await.unwrap().is_none());

    let category = repo.find_category(CategoryId::new(2)).await.unwrap().unwrap();
    assert_eq!(category.kind, "Art");
    assert!(repo.find_category(CategoryId::new(7)).await.unwrap().is_none());
}

async fn rejects_duplicate_category<R: QuestionRepository>(repo: &R) {
    let result = repo.insert_category(Category::new(1, "Again")).await;
    assert!(matches!(result, Err(RepositoryError::Persistence(_))));
}

async fn deletes_permanently<R: QuestionRepository>(repo: &R, ids: &[QuestionId]) {
    repo.delete_question(ids[1]).await.unwrap();
    assert!(repo.find_question(ids[1]).await.unwrap().is_none());
    assert_eq!(repo.list_questions().await.unwrap().len(), ids.len() - 1);
    assert_eq!(
        repo.delete_question(ids[1]).await,
        Err(RepositoryError::NotFound(ids[1]))
    );
}
