#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::config::Config;
    use crate::generator::build;
    use crate::generator::context::BuildContext;
    use crate::types::workshop::{Semester, Team, Workshop};

    fn test_context() -> BuildContext {
        BuildContext::new(Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_concurrent_inserts_lose_nothing() {
        let context = test_context();

        let mut tasks = Vec::new();
        for i in 0..30 {
            let context = context.clone();
            let team = Team::ALL[i % Team::ALL.len()];
            let semester = Semester::ACTIVE[i % Semester::ACTIVE.len()];

            tasks.push(tokio::spawn(async move {
                context
                    .insert_workshop(Workshop {
                        name: format!("Workshop {}", i),
                        team,
                        semester,
                        link: format!("https://example.com/{}", i),
                    })
                    .await;
            }));
        }

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(context.snapshot().await.len(), 30);
    }

    #[tokio::test]
    async fn test_execute_inserts_valid_entries() {
        let context = test_context();
        let links = HashMap::from([
            (
                "dev/git-intro-f24".to_string(),
                "https://example.com/intro".to_string(),
            ),
            (
                "oss/f25-rust-basics".to_string(),
                "https://example.com/rust".to_string(),
            ),
            // Unknown team, silently dropped
            (
                "robotics/arm-f24".to_string(),
                "https://example.com/arm".to_string(),
            ),
            // No shape matches, surfaced as a warning
            (
                "not a key".to_string(),
                "https://example.com/none".to_string(),
            ),
        ]);

        build::execute(&context, &links).await.unwrap();

        let table = context.snapshot().await;
        assert_eq!(table.len(), 2);

        let bucket = table.bucket(Team::Dev, Semester::Fa24);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].name, "Git Intro");
        assert_eq!(bucket[0].link, "https://example.com/intro");

        let bucket = table.bucket(Team::Oss, Semester::Fa25);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].name, "Rust Basics");
    }

    #[tokio::test]
    async fn test_execute_drops_non_workshop_links() {
        let context = test_context();
        let links = HashMap::from([
            (
                "gamedev/js-game-f25".to_string(),
                "https://codepen.io/someone/pen/xyz".to_string(),
            ),
            (
                "design/feedback-f24".to_string(),
                "https://docs.google.com/forms/d/e/abc".to_string(),
            ),
            (
                "ai/notebook-s25".to_string(),
                "https://colab.research.google.com/drive/xyz".to_string(),
            ),
        ]);

        build::execute(&context, &links).await.unwrap();

        assert!(context.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_execute_drops_inactive_semester() {
        let context = test_context();
        let links = HashMap::from([(
            "dev/legacy-s26".to_string(),
            "https://example.com/legacy".to_string(),
        )]);

        build::execute(&context, &links).await.unwrap();

        assert!(context.snapshot().await.is_empty());
    }
}
