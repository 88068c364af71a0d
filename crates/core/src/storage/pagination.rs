//! Scan pagination.
//!
//! The store returns size-bounded pages and a continuation token while more
//! items remain. These loops follow the tokens until the store stops
//! returning one; a short or empty page alone never ends the loop.

use crate::user::User;

use super::{Result, ScanFilter, ScanRequest, UserStore};

/// Collects every user matching `filter`.
pub async fn scan_all<S>(
    store: &S,
    filter: &ScanFilter,
    page_size: Option<u32>,
) -> Result<Vec<User>>
where
    S: UserStore + ?Sized,
{
    let mut users = Vec::new();
    let mut start_after = None;

    loop {
        let request = ScanRequest::new(filter.clone())
            .with_limit(page_size)
            .starting_after(start_after.take());

        let page = store.scan_users(&request).await?;
        users.extend(page.users);

        match page.next {
            Some(token) => start_after = Some(token),
            None => break,
        }
    }

    Ok(users)
}

/// Counts every user matching `filter` without materializing records.
pub async fn count_all<S>(
    store: &S,
    filter: &ScanFilter,
    page_size: Option<u32>,
) -> Result<usize>
where
    S: UserStore + ?Sized,
{
    let mut total = 0;
    let mut start_after = None;

    loop {
        let request = ScanRequest::new(filter.clone())
            .with_limit(page_size)
            .starting_after(start_after.take());

        let page = store.count_users(&request).await?;
        total += page.count;

        match page.next {
            Some(token) => start_after = Some(token),
            None => break,
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::storage::{ContinuationToken, CountPage, RepositoryError, ScanPage};
    use crate::user::UserChanges;

    /// Replays scripted pages and records the requests it receives.
    #[derive(Default)]
    struct ScriptedStore {
        pages: Mutex<VecDeque<Result<ScanPage>>>,
        requests: Mutex<Vec<ScanRequest>>,
    }

    impl ScriptedStore {
        fn new(pages: Vec<Result<ScanPage>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn next_page(&self, request: &ScanRequest) -> Result<ScanPage> {
            self.requests.lock().unwrap().push(request.clone());
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("scan went past the last scripted page")
        }

        fn requests(&self) -> Vec<ScanRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserStore for ScriptedStore {
        async fn put_user(&self, _user: &User) -> Result<()> {
            unimplemented!()
        }

        async fn get_user(&self, _user_id: &str) -> Result<Option<User>> {
            unimplemented!()
        }

        async fn update_user(&self, _user_id: &str, _changes: &UserChanges) -> Result<()> {
            unimplemented!()
        }

        async fn delete_user(&self, _user_id: &str) -> Result<()> {
            unimplemented!()
        }

        async fn scan_users(&self, request: &ScanRequest) -> Result<ScanPage> {
            self.next_page(request)
        }

        async fn count_users(&self, request: &ScanRequest) -> Result<CountPage> {
            let page = self.next_page(request)?;
            Ok(CountPage {
                count: page.users.len(),
                next: page.next,
            })
        }
    }

    fn user(user_id: &str) -> User {
        User::new(user_id, "org-1", "Ada", "Lovelace", 1)
    }

    fn page(ids: &[&str], next: Option<&str>) -> Result<ScanPage> {
        Ok(ScanPage {
            users: ids.iter().map(|id| user(id)).collect(),
            next: next.map(ContinuationToken::new),
        })
    }

    fn scripted_pages() -> Vec<Result<ScanPage>> {
        vec![
            page(&["a", "b"], Some("b")),
            page(&[], Some("d")),
            page(&["e"], None),
        ]
    }

    #[tokio::test]
    async fn test_scan_all_follows_tokens_past_empty_pages() {
        let store = ScriptedStore::new(scripted_pages());

        let users = scan_all(&store, &ScanFilter::All, Some(2)).await.unwrap();

        let ids: Vec<&str> = users.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "e"]);
    }

    #[tokio::test]
    async fn test_scan_all_passes_tokens_and_limit() {
        let store = ScriptedStore::new(scripted_pages());
        let filter = ScanFilter::Organization("org-1".to_string());

        scan_all(&store, &filter, Some(2)).await.unwrap();

        let requests = store.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].start_after, None);
        assert_eq!(requests[1].start_after, Some(ContinuationToken::new("b")));
        assert_eq!(requests[2].start_after, Some(ContinuationToken::new("d")));
        assert!(requests
            .iter()
            .all(|r| r.limit == Some(2) && r.filter == filter));
    }

    #[tokio::test]
    async fn test_single_page_without_token_is_complete() {
        let store = ScriptedStore::new(vec![page(&["a"], None)]);

        let users = scan_all(&store, &ScanFilter::All, None).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(store.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_count_all_matches_scan_all() {
        let counted = count_all(&ScriptedStore::new(scripted_pages()), &ScanFilter::All, Some(2))
            .await
            .unwrap();
        let scanned = scan_all(&ScriptedStore::new(scripted_pages()), &ScanFilter::All, Some(2))
            .await
            .unwrap();

        assert_eq!(counted, 3);
        assert_eq!(counted, scanned.len());
    }

    #[tokio::test]
    async fn test_error_on_later_page_is_returned() {
        let store = ScriptedStore::new(vec![
            page(&["a"], Some("a")),
            Err(RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())),
        ]);

        let result = scan_all(&store, &ScanFilter::All, Some(1)).await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
    }
}
