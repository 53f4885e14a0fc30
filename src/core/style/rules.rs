//! Style detection rule table.
//!
//! Rules are evaluated in table order; the order is the priority used when the
//! style set is truncated. Every pattern is case-insensitive and covers English,
//! Korean, Chinese and Japanese cues.

use std::sync::LazyLock;

use regex::Regex;

use super::StyleTag;

/// A single keyword/punctuation rule mapping to one style tag.
#[derive(Debug)]
pub struct StyleRule {
    pub tag: StyleTag,
    pattern: Regex,
}

impl StyleRule {
    fn new(tag: StyleTag, pattern: &str) -> Self {
        Self {
            tag,
            pattern: Regex::new(pattern).expect("valid regex"),
        }
    }

    /// Returns whether the rule fires for `text`.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered rule table.
pub static STYLE_RULES: LazyLock<Vec<StyleRule>> = LazyLock::new(|| {
    vec![
        StyleRule::new(
            StyleTag::Apology,
            r"(?i)\b(?:sorry|apologi[sz]e|apologies|my bad|forgive me|pardon me)\b|미안|죄송|용서해|对不起|抱歉|不好意思|ごめん|すみません|申し訳",
        ),
        StyleRule::new(
            StyleTag::Gratitude,
            r"(?i)\b(?:thanks|thank you|thx|grateful|appreciate[sd]?)\b|고마워|고맙|감사|谢谢|感谢|多谢|ありがとう|感謝",
        ),
        StyleRule::new(
            StyleTag::Celebration,
            r"(?i)\b(?:congrats|congratulations|hooray|yay|woohoo|happy birthday|we did it|cheers)\b|축하|만세|恭喜|祝贺|万岁|おめでとう|やった|乾杯",
        ),
        StyleRule::new(
            StyleTag::Comfort,
            r"(?i)\b(?:it'?s (?:ok|okay|alright)|don'?t worry|you'?re not alone|i'?m here for you|it will be (?:ok|okay|fine))\b|괜찮아|걱정\s*마|힘내|没关系|别担心|不要担心|大丈夫|心配しないで",
        ),
        StyleRule::new(
            StyleTag::Teasing,
            r"(?i)\b(?:just kidding|jk|silly you|gotcha|hehe+)\b|놀리|장난이야|메롱|逗你|开玩笑|からかう|冗談",
        ),
        StyleRule::new(
            StyleTag::Romantic,
            r"(?i)\b(?:love you|my love|darling|sweetheart|miss you|adore you)\b|사랑해|보고\s*싶|자기야|我爱你|想你|亲爱的|愛してる|大好き|会いたい",
        ),
        StyleRule::new(
            StyleTag::Whisper,
            r"(?i)\b(?:whisper(?:s|ing)?|secretly|quietly|hush|shh+)\b|쉿|비밀인데|속삭|悄悄|小声|秘密|ささや|ないしょ|内緒",
        ),
        StyleRule::new(
            StyleTag::Authority,
            r"(?i)\b(?:you must|listen to me|that'?s an order|i insist|do it now|obey)\b|당장|명령이야|반드시|必须|立刻|命令|今すぐ|必ず",
        ),
        StyleRule::new(
            StyleTag::Urgency,
            r"(?i)\b(?:hurry|quick(?:ly)?|asap|urgent|right now|emergency)\b|빨리|서둘러|급해|긴급|快点|赶紧|紧急|急いで|早く|緊急",
        ),
        StyleRule::new(
            StyleTag::Curious,
            r"(?i)\b(?:i wonder|curious|what if|how come)\b|궁금|어째서|好奇|为什么|怎么回事|気になる|なぜ|どうして",
        ),
        StyleRule::new(
            StyleTag::Storytelling,
            r"(?i)\b(?:once upon a time|long ago|one day|legend has it)\b|옛날\s*옛적|옛날에|어느\s*날|从前|很久以前|有一天|昔々|むかしむかし|ある日",
        ),
        StyleRule::new(
            StyleTag::Instructional,
            r"(?i)\b(?:step \d+|how to|make sure to|follow these|first,|next,|finally,)|단계|먼저|다음으로|마지막으로|第一步|首先|然后|最后|手順|まず|次に",
        ),
        StyleRule::new(
            StyleTag::Humor,
            r"(?i)\b(?:ha(?:ha)+|lol|lmao|funny|joke|hilarious)\b|ㅋㅋ|하하|웃기|哈哈|好笑|笑死|笑える|面白い",
        ),
    ]
});
