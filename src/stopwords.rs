//! Static stopword sets for bilingual token filtering
//!
//! Three sets are exposed: the general English and Chinese lists used by the
//! tokenizer, and a deliberately smaller list used by the bigram extractor so
//! that useful two-word phrases are not shredded by aggressive filtering.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// English function words plus prompt-corpus boilerplate.
///
/// The boilerplate tail ("generate", "explain", "format", ...) exists because
/// an AI-prompt corpus is saturated with instruction verbs that carry no
/// signal about the author.
const ENGLISH: &[&str] = &[
    // Function words
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "am",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "need", "ought", "to",
    "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
    "through", "during", "before", "after", "above", "below", "between",
    "under", "over", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "and", "but", "if",
    "or", "because", "until", "while", "this", "that", "these", "those",
    "it", "its", "he", "she", "they", "them", "his", "her", "their", "what",
    "which", "who", "whom", "me", "my", "we", "our", "you", "your", "us",
    "about", "up", "down", "out", "off", "also", "now", "get", "got", "one",
    // Prompt-engineering boilerplate
    "generate", "explain", "format", "please", "write", "make", "give",
    "want", "need", "help", "use", "using", "create", "provide", "following",
    "based", "output", "input", "example", "result", "answer", "question",
    "text", "content", "list", "show", "tell", "like", "way", "thing",
    "things", "something", "anything",
];

/// Chinese function words, pronouns, and measure words.
const CHINESE: &[&str] = &[
    "的", "了", "和", "是", "就", "都", "而", "及", "与", "着", "或",
    "一个", "没有", "我们", "你们", "他们", "它们", "这个", "那个", "这些",
    "那些", "自己", "什么", "哪些", "怎么", "如何", "为什么", "因为", "所以",
    "但是", "然而", "如果", "虽然", "即使", "只要", "不过", "而且", "并且",
    "或者", "可以", "可能", "应该", "需要", "必须", "已经", "正在", "将要",
    "曾经", "一直", "总是", "经常", "有时", "偶尔", "从不", "非常", "十分",
    "相当", "比较", "更加", "一下", "一些", "这样", "那样", "还是", "就是",
    "帮我", "请问", "能不能", "可不可以", "怎么样", "是不是", "有没有",
    "不是", "时候", "现在", "然后", "其实", "觉得", "知道", "进行", "通过",
    "根据", "对于", "关于", "这里", "那里", "东西", "问题", "内容", "要求",
];

/// Trimmed-down exclusion list for bigram endpoints.
///
/// Smaller than the general sets: connector words sometimes belong in a
/// phrase, so only the emptiest tokens are rejected outright.
const BIGRAM_LITE: &[&str] = &[
    "the", "a", "an", "is", "are", "to", "of", "in", "and", "or", "it",
    "this", "that", "be", "as", "at", "by", "on", "for", "with",
    "的", "了", "是", "和", "就", "都", "我", "你", "他", "她", "它",
    "帮我", "请", "一个", "这个", "那个",
];

lazy_static! {
    /// General English stopword set (tokenizer).
    pub static ref ENGLISH_STOPWORDS: HashSet<&'static str> =
        ENGLISH.iter().copied().collect();

    /// General Chinese stopword set (tokenizer).
    pub static ref CHINESE_STOPWORDS: HashSet<&'static str> =
        CHINESE.iter().copied().collect();

    /// Reduced stopword set for bigram endpoint filtering.
    pub static ref BIGRAM_STOPWORDS: HashSet<&'static str> =
        BIGRAM_LITE.iter().copied().collect();
}
