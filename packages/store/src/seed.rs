use tracing::info;

use crate::error::StoreResult;
use crate::model::{NewComment, NewUser, NewVideo};
use crate::traits::FeedStore;

/// Demo creators: `(username, avatar)`.
const FIXTURE_USERS: &[(&str, &str)] = &[
    (
        "@sophia_dance",
        "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=80&h=80&fit=crop&crop=face",
    ),
    (
        "@chef_marco",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=80&h=80&fit=crop&crop=face",
    ),
    (
        "@style_luna",
        "https://images.unsplash.com/photo-1494790108755-2616b612c6cd?w=80&h=80&fit=crop&crop=face",
    ),
    (
        "@fitness_mike",
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=80&h=80&fit=crop&crop=face",
    ),
    (
        "@travel_sarah",
        "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?w=80&h=80&fit=crop&crop=face",
    ),
    (
        "@alex_cool",
        "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=80&h=80&fit=crop&crop=face",
    ),
];

struct FixtureVideo {
    owner: usize,
    video_url: &'static str,
    thumbnail_url: &'static str,
    description: &'static str,
    music: &'static str,
}

const FIXTURE_VIDEOS: &[FixtureVideo] = &[
    FixtureVideo {
        owner: 0,
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=800&fit=crop",
        description: "Sunset vibes in the city 🌅 #dance #sunset #vibes",
        music: "Original Sound - sophia_dance",
    },
    FixtureVideo {
        owner: 1,
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400&h=800&fit=crop",
        description: "Perfect pasta in 60 seconds! 🍝 #cooking #pasta #recipe",
        music: "Cooking Beat - TrendyTunes",
    },
    FixtureVideo {
        owner: 2,
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=400&h=800&fit=crop",
        description: "Thrift flip transformation ✨ #fashion #thrift #style",
        music: "Fashion Week - StyleSounds",
    },
    FixtureVideo {
        owner: 3,
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=800&fit=crop",
        description: "Morning workout routine 💪 #fitness #workout #motivation",
        music: "Workout Beats - FitMusic",
    },
];

/// `(video, author, text)` by fixture index.
const FIXTURE_COMMENTS: &[(usize, usize, &str)] = &[
    (0, 5, "This is amazing! 🔥"),
    (0, 3, "What's the song name?"),
    (0, 4, "Tutorial please! 💃"),
    (1, 0, "Making this tonight!"),
    (1, 2, "Looks delicious 😋"),
];

/// `(user, video)` by fixture index.
const FIXTURE_LIKES: &[(usize, usize)] = &[(5, 0), (4, 0), (3, 0), (0, 1), (2, 1), (1, 3)];

/// `(follower, following)` by fixture index.
const FIXTURE_FOLLOWS: &[(usize, usize)] = &[(5, 0), (4, 0), (0, 1), (2, 1), (3, 4)];

/// Populate an empty store with the demo catalogue.
///
/// Everything goes through the public store operations, so every derived
/// counter matches the records it mirrors. Returns `false` without touching
/// the store if the first fixture user already exists.
pub async fn seed_fixtures(store: &dyn FeedStore) -> StoreResult<bool> {
    if store
        .get_user_by_username(FIXTURE_USERS[0].0)
        .await?
        .is_some()
    {
        info!("Fixture data already present, skipping seed");
        return Ok(false);
    }

    let mut user_ids = Vec::with_capacity(FIXTURE_USERS.len());
    for &(username, avatar) in FIXTURE_USERS {
        let user = store
            .create_user(NewUser {
                username: username.to_string(),
                avatar: avatar.to_string(),
            })
            .await?;
        user_ids.push(user.id);
    }

    let mut video_ids = Vec::with_capacity(FIXTURE_VIDEOS.len());
    for fixture in FIXTURE_VIDEOS {
        let video = store
            .create_video(NewVideo {
                user_id: user_ids[fixture.owner],
                video_url: fixture.video_url.to_string(),
                thumbnail_url: fixture.thumbnail_url.to_string(),
                description: fixture.description.to_string(),
                music: fixture.music.to_string(),
            })
            .await?;
        video_ids.push(video.id);
    }

    for &(video, author, text) in FIXTURE_COMMENTS {
        store
            .create_comment(NewComment {
                video_id: video_ids[video],
                user_id: user_ids[author],
                text: text.to_string(),
            })
            .await?;
    }

    for &(user, video) in FIXTURE_LIKES {
        store.like_video(user_ids[user], video_ids[video]).await?;
    }

    for &(follower, following) in FIXTURE_FOLLOWS {
        store
            .follow_user(user_ids[follower], user_ids[following])
            .await?;
    }

    info!(
        users = user_ids.len(),
        videos = video_ids.len(),
        comments = FIXTURE_COMMENTS.len(),
        "Seeded fixture data"
    );

    Ok(true)
}
