//! # Content Filter Engine
//!
//! Pure view computations over the read-only reference data. Both filters
//! are total and stable: output order is always a subsequence of input
//! order, and unmatched criteria simply yield an empty view.

use bb_core::models::{FilterCriteria, Forum, Post};

/// Case-insensitive substring match of `search_text` against forum names.
/// Empty search text passes everything through unchanged.
pub fn filter_forums<'a>(forums: &'a [Forum], search_text: &str) -> Vec<&'a Forum> {
    let needle = search_text.to_lowercase();
    forums
        .iter()
        .filter(|forum| forum.name.to_lowercase().contains(&needle))
        .collect()
}

/// A post passes iff every criterion holds: category (exact,
/// case-insensitive, or `All`), anonymous visibility, and the experts-only
/// badge check.
pub fn filter_posts<'a>(posts: &'a [Post], criteria: &FilterCriteria) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| {
            let category_match = criteria.category.matches(&post.category);
            let anonymous_match = criteria.include_anonymous || !post.is_anonymous;
            let expert_match = !criteria.experts_only || has_expert_badge(post);
            category_match && anonymous_match && expert_match
        })
        .collect()
}

fn has_expert_badge(post: &Post) -> bool {
    post.badges
        .iter()
        .any(|badge| badge.to_lowercase().contains("expert"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_core::models::CategoryFilter;

    fn post(id: u64, category: &str, anonymous: bool, badges: &[&str]) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            author: "Jane Doe".into(),
            author_reputation: 100,
            badges: badges.iter().map(|b| b.to_string()).collect(),
            like_count: 10,
            comment_count: 2,
            is_anonymous: anonymous,
            content_warnings: vec![],
            category: category.into(),
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post(1, "Experience Sharing", false, &["Top Contributor"]),
            post(2, "Expert Advice", false, &["Certified Nutritionist", "Expert"]),
            post(3, "Support Needed", false, &["Verified Patient"]),
            post(4, "Support Needed", true, &[]),
        ]
    }

    #[test]
    fn wide_open_criteria_return_input_unchanged() {
        let posts = sample_posts();
        let criteria = FilterCriteria {
            include_anonymous: true,
            ..FilterCriteria::default()
        };
        let visible = filter_posts(&posts, &criteria);
        let ids: Vec<u64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn anonymous_posts_hidden_by_default() {
        let posts = sample_posts();
        let visible = filter_posts(&posts, &FilterCriteria::default());
        assert!(visible.iter().all(|p| !p.is_anonymous));
    }

    #[test]
    fn category_filter_matches_case_insensitively() {
        let posts = sample_posts();
        let criteria = FilterCriteria {
            category: CategoryFilter::Named("support needed".into()),
            include_anonymous: true,
            ..FilterCriteria::default()
        };
        let ids: Vec<u64> = filter_posts(&posts, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn experts_only_requires_an_expert_badge_substring() {
        let posts = sample_posts();
        let criteria = FilterCriteria {
            experts_only: true,
            include_anonymous: true,
            ..FilterCriteria::default()
        };
        let ids: Vec<u64> = filter_posts(&posts, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn output_is_an_order_preserving_subsequence() {
        let posts = sample_posts();
        let criteria = FilterCriteria {
            category: CategoryFilter::Named("Support Needed".into()),
            include_anonymous: true,
            ..FilterCriteria::default()
        };
        let visible = filter_posts(&posts, &criteria);
        let mut cursor = posts.iter();
        for kept in visible {
            assert!(cursor.any(|p| p.id == kept.id), "filter reordered its input");
        }
    }

    #[test]
    fn forum_search_is_substring_and_case_insensitive() {
        let forums = vec![
            Forum {
                id: 1,
                name: "Women's Health".into(),
                member_count: 1200,
                post_count: 5600,
                expert_badges: vec!["Gynecologist".into()],
                is_restricted: false,
                topics: vec!["Preventive Care".into()],
                engagement_rate: 85,
            },
            Forum {
                id: 2,
                name: "Mental Wellness".into(),
                member_count: 850,
                post_count: 3800,
                expert_badges: vec!["Therapist".into()],
                is_restricted: true,
                topics: vec!["Stress Management".into()],
                engagement_rate: 92,
            },
        ];
        assert_eq!(filter_forums(&forums, "").len(), 2);
        let hits = filter_forums(&forums, "wellness");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
        assert!(filter_forums(&forums, "cardiology").is_empty());
    }
}
