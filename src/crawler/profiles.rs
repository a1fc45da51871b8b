// Built-in crawl profiles: seed queries, keyword sets and category rules
//
// These are data only; the classifier and crawler never special-case them.

use super::classifier::CategoryRule;
use super::config::Profile;
use super::models::Label;

/// Names accepted by [`builtin`]
pub const NAMES: &[&str] = &["crypto-legit", "giftcard-legit", "giveaway-scam"];

pub fn builtin(name: &str) -> Option<Profile> {
    match name {
        "crypto-legit" => Some(build(
            name,
            Label::Legitimate,
            "youtube_shorts_crypto_legit",
            "scraped_videos_index_youtube_shorts_crypto_legit.json",
            "video_crawler_legit",
            CRYPTO_QUERIES,
            CRYPTO_INCLUDE,
            CRYPTO_EXCLUDE,
            CRYPTO_CATEGORIES,
            CRYPTO_DEFAULT_CATEGORY,
        )),
        "giftcard-legit" => Some(build(
            name,
            Label::Legitimate,
            "youtube_shorts_giftcards_legit",
            "scraped_videos_index_youtube_shorts_giftcards_legit.json",
            "video_crawler_legit",
            GIFTCARD_QUERIES,
            GIFTCARD_INCLUDE,
            GIFTCARD_EXCLUDE,
            &[],
            GIFTCARD_DEFAULT_CATEGORY,
        )),
        "giveaway-scam" => Some(build(
            name,
            Label::Scam,
            "youtube_shorts_crypto_scam",
            "scraped_videos_index_youtube_shorts_product_scam.json",
            "video_crawler_scam",
            GIVEAWAY_QUERIES,
            GIVEAWAY_INCLUDE,
            GIVEAWAY_EXCLUDE,
            GIVEAWAY_CATEGORIES,
            GIVEAWAY_DEFAULT_CATEGORY,
        )),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
fn build(
    name: &str,
    label: Label,
    slug: &str,
    index_file: &str,
    default_folder: &str,
    queries: &[&str],
    include: &[&str],
    exclude: &[&str],
    categories: &[(&str, &[&str])],
    default_category: &str,
) -> Profile {
    let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
    Profile {
        name: name.to_string(),
        label,
        slug: slug.to_string(),
        index_file: index_file.to_string(),
        default_folder: default_folder.to_string(),
        queries: owned(queries),
        include: owned(include),
        exclude: owned(exclude),
        categories: categories
            .iter()
            .map(|(label, keywords)| CategoryRule::new(label, keywords))
            .collect(),
        default_category: default_category.to_string(),
    }
}

// Crypto education / news (legitimate)

const CRYPTO_QUERIES: &[&str] = &[
    "bitcoin explained", "ethereum explained", "crypto basics tutorial",
    "how bitcoin works", "how blockchain works", "crypto for beginners",
    "cryptocurrency explained", "defi explained", "web3 explained", "nft explained",
    "smart contract explained", "proof of stake explained", "crypto wallet how to",
    "gas fees explained", "layer 2 explained", "crypto honest review",
    "bitcoin honest opinion", "crypto facts vs myths", "is bitcoin a scam debunked",
    "crypto not a scam", "crypto honest analysis", "bitcoin not scam", "ethereum not scam",
    "crypto real review", "how to spot crypto scam", "crypto scam warning",
    "avoid crypto scam", "crypto security tips", "crypto red flags",
    "protect crypto wallet", "crypto scam awareness", "crypto safety guide",
    "crypto news today", "bitcoin news", "ethereum news", "crypto market update",
    "bitcoin price analysis", "eth market analysis", "crypto weekly recap",
    "blockchain news update", "crypto investing guide", "bitcoin long term investment",
    "crypto portfolio tips", "dollar cost averaging crypto", "crypto risk management",
    "crypto tax explained", "crypto regulation news",
];

const CRYPTO_INCLUDE: &[&str] = &[
    "explained", "tutorial", "how to", "guide", "learn", "education", "beginner",
    "introduction", "basics", "overview", "course", "lesson", "101", "what is",
    "deep dive", "understanding", "walkthrough", "analysis", "review", "news", "update",
    "report", "summary", "breakdown", "market", "trend", "price analysis", "weekly",
    "monthly", "opinion", "thoughts", "honest", "real talk", "unbiased", "scam warning",
    "avoid scam", "scam alert", "protect yourself", "security tips", "how to spot",
    "red flags", "be careful", "scam awareness", "not a scam", "not scam", "legitimate",
    "legit", "honest review", "honest opinion", "blockchain", "defi", "web3",
    "smart contract", "proof of stake", "proof of work", "wallet", "transaction",
    "gas fees", "layer 2", "consensus", "decentralized", "open source", "whitepaper",
    "investing", "portfolio", "diversify", "risk management", "dollar cost averaging",
    "dca", "hodl", "long term", "fundamentals", "crypto tax", "regulation", "compliance",
    "institutional",
];

const CRYPTO_EXCLUDE: &[&str] = &[
    "free bitcoin", "free crypto", "free eth", "free btc", "double your bitcoin",
    "double your crypto", "triple your", "multiply your crypto", "guaranteed profit",
    "guaranteed returns", "can't lose", "risk free profit", "instant profit",
    "overnight profit", "get rich quick", "make money fast", "easy money",
    "bitcoin giveaway", "crypto giveaway", "eth giveaway", "free airdrop",
    "claim free crypto", "claim free tokens", "doubler", "bitcoin generator",
    "crypto generator", "send btc get", "send eth get", "send crypto get",
    "100% real working", "working 2024", "working 2025", "elon musk giveaway",
    "vitalik giveaway", "link in bio free", "dm me for profits", "trading bot free profit",
    "automated crypto profit guaranteed", "10x guaranteed", "1000x guaranteed",
    "moonshot guaranteed",
];

const CRYPTO_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Crypto News",
        &["news", "update", "today", "breaking", "weekly recap"],
    ),
    (
        "Crypto Education",
        &["tutorial", "explained", "how to", "guide", "beginner", "101", "learn", "course"],
    ),
    (
        "Crypto Analysis",
        &["analysis", "price", "market", "trend", "chart", "technical"],
    ),
    (
        "Scam Awareness",
        &["scam warning", "avoid scam", "red flags", "security", "protect", "safety"],
    ),
    (
        "Crypto Investing",
        &["investing", "portfolio", "dca", "long term", "tax", "regulation"],
    ),
];

const CRYPTO_DEFAULT_CATEGORY: &str = "Crypto General";

// Gift card how-to / awareness (legitimate)

const GIFTCARD_QUERIES: &[&str] = &[
    "how to use gift card", "how to redeem gift card", "gift card tutorial",
    "how to buy gift card", "gift card explained", "gift card for beginners",
    "how to check gift card balance", "gift card tips and tricks",
    "how to use amazon gift card", "how to use google play gift card",
    "how to use steam gift card", "how to use apple gift card",
    "how to use visa gift card", "how to use mastercard gift card",
    "how to use playstation gift card", "how to use xbox gift card",
    "gift card honest review", "best gift cards 2024", "best gift cards 2025",
    "gift card worth it", "gift card comparison", "gift card pros and cons",
    "prepaid card review", "gift card vs cash", "digital gift card review",
    "egift card review", "gift card unboxing", "gift card scam warning",
    "how to spot gift card scam", "avoid gift card scam", "gift card fraud awareness",
    "gift card scam red flags", "gift card safety tips", "protect yourself gift card scam",
    "gift card scam explained", "irs gift card scam", "amazon gift card scam warning",
    "google play gift card scam awareness", "gift card scam alert",
    "never pay with gift card", "gift card scam not scam", "how to sell gift cards",
    "gift card resell tips", "gift card exchange guide", "cardcash review",
    "raise gift card review", "gift card granny review",
    "how to get discounted gift cards legitimately", "gift card deals tips",
    "gift card news update", "gift card regulation", "gift card consumer rights",
    "gift card expiration rules", "gift card fees explained", "gift card fraud report",
    "gift card law explained",
];

const GIFTCARD_INCLUDE: &[&str] = &[
    "explained", "tutorial", "how to", "guide", "learn", "education", "beginner",
    "introduction", "basics", "overview", "lesson", "what is", "understanding",
    "walkthrough", "tips", "tricks", "review", "comparison", "honest", "pros and cons",
    "worth it", "unboxing", "real talk", "unbiased", "opinion", "thoughts",
    "best gift card", "top gift cards", "recommended", "redeem", "redemption",
    "balance check", "activate", "pin", "how to use", "step by step", "instructions",
    "how to buy", "purchase", "legitimate", "legit", "official", "scam warning",
    "avoid scam", "scam alert", "protect yourself", "safety tips", "how to spot",
    "red flags", "be careful", "scam awareness", "not a scam", "not scam", "fraud warning",
    "consumer protection", "fraud prevention", "never pay with gift card", "irs warning",
    "scam explained", "amazon gift card", "google play gift card", "apple gift card",
    "steam gift card", "visa gift card", "mastercard gift card", "playstation gift card",
    "xbox gift card", "netflix gift card", "walmart gift card", "target gift card",
    "starbucks gift card", "cardcash", "raise.com", "gift card granny", "resell gift card",
    "discounted gift card", "gift card exchange", "sell gift card", "news", "update",
    "regulation", "consumer rights", "expiration", "fees", "law", "policy", "report",
    "ftc", "consumer alert",
];

const GIFTCARD_EXCLUDE: &[&str] = &[
    "free gift card", "free amazon gift card", "free google play", "free steam gift card",
    "free apple gift card", "free playstation", "free xbox gift card",
    "free netflix gift card", "free walmart gift card", "unlimited gift cards",
    "infinite gift cards", "gift card generator", "gift card hack", "gift card glitch",
    "gift card exploit", "free gift card codes", "gift card code generator",
    "working gift card codes", "100% working gift card", "gift card method working",
    "free robux gift card", "free v-bucks gift card", "free roblox gift card",
    "gift card giveaway unlimited", "win unlimited gift cards", "gift card trick free",
    "get free gift card fast", "gift card cheat", "gift card loophole free",
    "claim free gift card", "generate gift card codes free", "working 2024 gift card",
    "working 2025 gift card", "free gift card no survey", "gift card no verification free",
    "earn unlimited gift cards", "gift card money glitch", "100 dollar gift card free",
    "gift card instantly free", "link in bio free gift", "dm me free gift card",
];

const GIFTCARD_DEFAULT_CATEGORY: &str = "Gift Card General";

// Product giveaway bait (scam)

const GIVEAWAY_QUERIES: &[&str] = &[
    "free iPhone giveaway", "win free iPhone", "iPhone giveaway 2024",
    "iPhone giveaway 2025", "iPhone 15 giveaway", "iPhone 16 giveaway", "free iPhone 15",
    "free iPhone 16", "iPhone winner", "claim free iPhone", "iPhone giveaway winner",
    "free iPad giveaway", "win free iPad", "iPad giveaway 2024", "iPad giveaway 2025",
    "iPad Pro giveaway", "free iPad", "claim free iPad", "iPad winner giveaway",
    "free AirPods giveaway", "win AirPods", "AirPods giveaway 2024",
    "AirPods giveaway 2025", "AirPods Pro giveaway", "free AirPods", "claim free AirPods",
    "AirPods winner", "free keyboard giveaway", "win gaming keyboard", "keyboard giveaway",
    "mechanical keyboard giveaway free", "free gaming keyboard",
    "keyboard winner giveaway", "free gaming mouse giveaway", "win gaming mouse",
    "mouse giveaway", "free mouse giveaway", "gaming mouse giveaway winner",
    "free headset giveaway", "win gaming headset", "headset giveaway",
    "free headphones giveaway", "AirPods Max giveaway free", "Sony headphones giveaway",
    "free headphones winner", "free gadget giveaway", "win free tech", "free PS5 giveaway",
    "free Xbox giveaway", "free Nintendo Switch giveaway", "free Samsung giveaway",
    "free MacBook giveaway", "free laptop giveaway", "win free laptop",
    "free smartwatch giveaway", "free Apple Watch giveaway", "free gaming pc giveaway",
    "like and win iPhone", "comment to win iPhone", "follow to win free iPhone",
    "subscribe win iPhone", "like to win free gadget", "comment win free AirPods",
    "follow win free headset", "tag friend win iPhone", "share to win free tech",
    "you won iPhone", "you won free gadget", "claim your prize iPhone",
    "free prize iPhone link bio", "dm to claim free iPhone", "free gift iPhone",
    "gift card iPhone giveaway",
];

const GIVEAWAY_INCLUDE: &[&str] = &[
    "free iphone", "iphone giveaway", "win iphone", "claim iphone", "iphone winner",
    "free iphone 15", "free iphone 16", "free ipad", "ipad giveaway", "win ipad",
    "claim ipad", "ipad winner", "free airpods", "airpods giveaway", "win airpods",
    "claim airpods", "airpods winner", "free airpods pro", "airpods max giveaway",
    "free keyboard", "keyboard giveaway", "win keyboard", "free gaming keyboard",
    "claim keyboard", "free mouse", "mouse giveaway", "win gaming mouse",
    "free gaming mouse", "claim mouse", "free headset", "headset giveaway", "win headset",
    "free headphones", "headphones giveaway", "win headphones", "free ps5", "ps5 giveaway",
    "free xbox", "xbox giveaway", "free nintendo switch", "switch giveaway",
    "free macbook", "macbook giveaway", "free laptop", "laptop giveaway", "free samsung",
    "samsung giveaway", "free smartwatch", "apple watch giveaway", "free gaming pc",
    "pc giveaway", "free gadget", "gadget giveaway", "win free tech", "like and win",
    "comment to win", "follow to win", "subscribe win", "tag friend win", "share to win",
    "like to win", "comment win free", "follow win free", "you won", "claim your prize",
    "you have been selected", "congratulations winner", "dm to claim", "link in bio free",
    "free gift", "gift card giveaway", "claim free gift", "working 2024", "working 2025",
    "100% real working",
];

const GIVEAWAY_EXCLUDE: &[&str] = &[
    "scam warning", "scam alert", "scam awareness", "avoid scam", "how to spot scam",
    "protect yourself", "red flags", "scam exposed", "scam explained", "scam analysis",
    "educational", "tutorial", "explained", "how to", "honest review", "unbiased",
    "honest opinion", "analysis", "breakdown", "deep dive", "review", "unboxing",
    "hands on", "first look",
];

const GIVEAWAY_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Crypto Giveaway",
        &["giveaway", "airdrop", "free bitcoin", "free crypto", "free eth"],
    ),
    (
        "Crypto Doubler",
        &["double", "triple", "multiply", "doubler", "multiplier", "send btc", "send eth"],
    ),
    (
        "Guaranteed Profit",
        &["guaranteed profit", "guaranteed returns", "risk free", "instant profit", "easy money", "get rich"],
    ),
    (
        "Celebrity Impersonation",
        &["elon musk", "vitalik", "binance giveaway", "coinbase giveaway", "musk"],
    ),
    (
        "Crypto Generator/Hack",
        &["generator", "hack", "adder", "bot", "working 2024", "working 2025"],
    ),
];

const GIVEAWAY_DEFAULT_CATEGORY: &str = "Crypto Scam General";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert_eq!(builtin(name).map(|p| p.name), Some(name.to_string()));
        }
        assert!(builtin("nope").is_none());
    }

    #[test]
    fn crypto_profile_rejects_giveaways() {
        let classifier = builtin("crypto-legit").unwrap().classifier();
        let verdict = classifier.classify("Bitcoin explained for beginners");
        assert!(verdict.accepted);
        assert_eq!(verdict.category, "Crypto Education");
        assert!(!classifier.accepts("Bitcoin explained + free bitcoin giveaway"));
    }

    #[test]
    fn giftcard_profile_has_single_category() {
        let classifier = builtin("giftcard-legit").unwrap().classifier();
        let verdict = classifier.classify("How to redeem an Amazon gift card");
        assert!(verdict.accepted);
        assert_eq!(verdict.category, "Gift Card General");
        assert!(!classifier.accepts("free amazon gift card generator"));
    }

    #[test]
    fn giveaway_profile_excludes_reviews() {
        let profile = builtin("giveaway-scam").unwrap();
        assert_eq!(profile.label, Label::Scam);
        let classifier = profile.classifier();
        assert!(classifier.accepts("Comment to win a FREE iPhone 16"));
        assert!(!classifier.accepts("free iphone giveaway scam explained"));
    }
}
