//! The injected reference dataset: four forums, four recent posts, and the
//! trending-topic list. The engine never mutates or persists any of this.

use bb_core::models::{Forum, Post};
use bb_engine::PanelDataset;

pub fn dataset() -> PanelDataset {
    PanelDataset {
        forums: forums(),
        posts: recent_posts(),
        trending_topics: trending_topics(),
    }
}

fn forums() -> Vec<Forum> {
    vec![
        Forum {
            id: 1,
            name: "Women's Health".into(),
            member_count: 1200,
            post_count: 5600,
            expert_badges: vec!["Gynecologist".into(), "Nutritionist".into()],
            is_restricted: false,
            topics: vec![
                "Menstrual Health".into(),
                "Hormonal Balance".into(),
                "Preventive Care".into(),
            ],
            engagement_rate: 85,
        },
        Forum {
            id: 2,
            name: "Fitness & Nutrition".into(),
            member_count: 980,
            post_count: 4200,
            expert_badges: vec!["Nutritionist".into(), "Personal Trainer".into()],
            is_restricted: false,
            topics: vec![
                "Healthy Eating".into(),
                "Workout Plans".into(),
                "Weight Management".into(),
            ],
            engagement_rate: 78,
        },
        Forum {
            id: 3,
            name: "Mental Wellness".into(),
            member_count: 850,
            post_count: 3800,
            expert_badges: vec!["Therapist".into(), "Psychologist".into()],
            is_restricted: true,
            topics: vec![
                "Anxiety".into(),
                "Depression".into(),
                "Stress Management".into(),
            ],
            engagement_rate: 92,
        },
        Forum {
            id: 4,
            name: "Reproductive Health".into(),
            member_count: 720,
            post_count: 3100,
            expert_badges: vec!["Fertility Specialist".into(), "Obstetrician".into()],
            is_restricted: false,
            topics: vec![
                "Fertility".into(),
                "Pregnancy".into(),
                "Postpartum Care".into(),
            ],
            engagement_rate: 88,
        },
    ]
}

fn recent_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "My PCOS Journey".into(),
            author: "Jane Doe".into(),
            author_reputation: 450,
            badges: vec!["Verified Patient".into(), "Top Contributor".into()],
            like_count: 45,
            comment_count: 12,
            is_anonymous: false,
            content_warnings: vec!["Medical Details".into()],
            category: "Experience Sharing".into(),
        },
        Post {
            id: 2,
            title: "Best Foods for Hormonal Balance".into(),
            author: "Nutrition Expert".into(),
            author_reputation: 780,
            badges: vec!["Certified Nutritionist".into(), "Expert".into()],
            like_count: 38,
            comment_count: 9,
            is_anonymous: false,
            content_warnings: vec![],
            category: "Expert Advice".into(),
        },
        Post {
            id: 3,
            title: "Coping with Endometriosis".into(),
            author: "Emily Smith".into(),
            author_reputation: 320,
            badges: vec!["Verified Patient".into()],
            like_count: 52,
            comment_count: 17,
            is_anonymous: false,
            content_warnings: vec!["Sensitive Content".into()],
            category: "Support Needed".into(),
        },
        Post {
            id: 4,
            title: "Anonymous: Struggling with Infertility".into(),
            author: "Anonymous".into(),
            author_reputation: 0,
            badges: vec![],
            like_count: 28,
            comment_count: 14,
            is_anonymous: true,
            content_warnings: vec!["Sensitive Content".into()],
            category: "Support Needed".into(),
        },
    ]
}

fn trending_topics() -> Vec<String> {
    [
        "Menstrual Cup Usage",
        "Hormone Balancing Foods",
        "Endometriosis Awareness",
        "Fertility Tracking Apps",
        "Menopause Symptoms",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
