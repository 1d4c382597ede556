use anyhow::Context;
use chrono::{Duration, Utc};
use mockfeed_client::{
    api::{Author, Media, MediaKind, ReactionKind, Time, UserId},
    Feed, IdGen, ReactionsExt,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const POST_WORD_COUNT: usize = 25;
const COMMENT_WORD_COUNT: usize = 12;
const REPLY_WORD_COUNT: usize = 6;
const MAX_GAP_MINUTES: i64 = 180;

/// Print a feed snapshot, in the format of the `posts` storage key
#[derive(structopt::StructOpt)]
struct Opt {
    /// Number of posts
    #[structopt(short, long, default_value = "20")]
    posts: usize,

    /// Maximum number of comments per post, and of replies per comment
    #[structopt(short, long, default_value = "8")]
    comments: usize,

    /// Number of distinct fake users authoring and reacting
    #[structopt(short, long, default_value = "5")]
    users: usize,

    /// RNG seed, the same seed always yields the same feed
    #[structopt(short, long, default_value = "0")]
    seed: u64,

    /// Print on one line instead of pretty-printing
    #[structopt(long)]
    compact: bool,
}

fn gen_author(i: usize) -> Author {
    Author {
        name: format!("User {i}"),
        username: format!("@user{i}"),
        avatar: format!("images/avatar{}.png", i % 4 + 1),
    }
}

fn gen_media(rng: &mut StdRng, post: usize) -> Vec<Media> {
    let n = rng.gen_range(0..=3);
    (0..n)
        .map(|i| Media {
            kind: MediaKind::Image,
            url: format!("https://picsum.photos/seed/{post}-{i}/600/400"),
        })
        .collect()
}

fn gen_kind(rng: &mut StdRng) -> ReactionKind {
    ReactionKind::ALL[rng.gen_range(0..ReactionKind::ALL.len())]
}

fn gen_reactors<'a>(rng: &mut StdRng, users: &'a [UserId], p: f64) -> Vec<&'a UserId> {
    users.iter().filter(|_| rng.gen_bool(p)).collect()
}

fn tick(rng: &mut StdRng, date: &mut Time) -> Time {
    *date = *date + Duration::minutes(rng.gen_range(1..=MAX_GAP_MINUTES));
    *date
}

/// Build a feed whose newest node is no later than `end`
fn generate(opt: &Opt, end: Time) -> anyhow::Result<Feed> {
    anyhow::ensure!(opt.users > 0, "at least one user is needed");

    let mut rng = StdRng::seed_from_u64(opt.seed);
    let authors = (0..opt.users).map(gen_author).collect::<Vec<_>>();
    let users = authors.iter().map(Author::user_id).collect::<Vec<UserId>>();

    let mut feed = Feed::default();
    let mut ids = IdGen::new();
    let max_nodes = opt.posts * (1 + opt.comments * (1 + opt.comments / 2));
    let mut date = end - Duration::minutes(MAX_GAP_MINUTES * max_nodes as i64);

    for p in 0..opt.posts {
        let author = authors[rng.gen_range(0..authors.len())].clone();
        let content = lipsum::lipsum_words_from_seed(POST_WORD_COUNT, rng.gen());
        let media = gen_media(&mut rng, p);
        let now = tick(&mut rng, &mut date);
        let post_id = feed
            .create_post(ids.next_post(now), now, author, &content, media)
            .with_context(|| format!("creating post {p}"))?
            .id;

        for _ in 0..rng.gen_range(0..=opt.comments) {
            let author = &authors[rng.gen_range(0..authors.len())];
            let text = lipsum::lipsum_words_from_seed(COMMENT_WORD_COUNT, rng.gen());
            let now = tick(&mut rng, &mut date);
            let comment_id = feed
                .add_comment(post_id, ids.next_comment(now), now, author, &text)
                .context("adding comment")?
                .id;

            for _ in 0..rng.gen_range(0..=opt.comments / 2) {
                let author = authors[rng.gen_range(0..authors.len())].clone();
                let text = lipsum::lipsum_words_from_seed(REPLY_WORD_COUNT, rng.gen());
                let now = tick(&mut rng, &mut date);
                let reply_id = feed
                    .add_reply(post_id, comment_id, ids.next_comment(now), now, author, &text)
                    .context("adding reply")?
                    .id;
                for user in gen_reactors(&mut rng, &users, 0.3) {
                    let kind = gen_kind(&mut rng);
                    feed.handle_reaction(post_id, reply_id, user, kind)
                        .context("reacting to reply")?;
                }
            }

            for user in gen_reactors(&mut rng, &users, 0.5) {
                let kind = gen_kind(&mut rng);
                feed.handle_reaction(post_id, comment_id, user, kind)
                    .context("reacting to comment")?;
            }
        }

        for _ in 0..rng.gen_range(0..=opt.users) {
            feed.toggle_like(post_id, false).context("liking post")?;
        }
    }

    let consistent = feed.posts.iter().flat_map(|p| &p.comments).all(|c| {
        c.reactions.is_consistent() && c.replies.iter().all(|r| r.reactions.is_consistent())
    });
    anyhow::ensure!(consistent, "generated reaction counts do not match their holders");
    Ok(feed)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let opt = <Opt as structopt::StructOpt>::from_args();
    let feed = generate(&opt, Utc::now())?;

    tracing::info!(
        posts = feed.posts.len(),
        max_id = feed.max_id(),
        "generated feed"
    );
    let json = match opt.compact {
        true => serde_json::to_string(&feed.posts),
        false => serde_json::to_string_pretty(&feed.posts),
    }
    .context("serializing generated feed")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn opt(seed: u64) -> Opt {
        Opt {
            posts: 6,
            comments: 4,
            users: 3,
            seed,
            compact: true,
        }
    }

    #[test]
    fn same_seed_same_feed() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let a = generate(&opt(7), end).unwrap();
        let b = generate(&opt(7), end).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.posts.len(), 6);
        assert!(a.posts.iter().all(|p| !p.content.is_empty() && p.timestamp <= end));
    }

    #[test]
    fn no_users_is_refused() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert!(generate(&Opt { users: 0, ..opt(0) }, end).is_err());
    }
}
