//! Compiled-in emoji catalog for the Icon Registry, in display order.

/// (key, glyph) pairs. Keys are unique; order is the gallery order.
pub const ICON_CATALOG: &[(&str, &str)] = &[
    ("grinning", "😀"),
    ("smiley", "😃"),
    ("smile", "😄"),
    ("grin", "😁"),
    ("laughing", "😆"),
    ("sweat_smile", "😅"),
    ("joy", "😂"),
    ("rofl", "🤣"),
    ("relaxed", "☺️"),
    ("blush", "😊"),
    ("innocent", "😇"),
    ("slightly_smiling_face", "🙂"),
    ("upside_down_face", "🙃"),
    ("wink", "😉"),
    ("relieved", "😌"),
    ("heart_eyes", "😍"),
    ("kissing_heart", "😘"),
    ("yum", "😋"),
    ("stuck_out_tongue", "😛"),
    ("zany_face", "🤪"),
    ("nerd_face", "🤓"),
    ("sunglasses", "😎"),
    ("star_struck", "🤩"),
    ("partying_face", "🥳"),
    ("smirk", "😏"),
    ("unamused", "😒"),
    ("disappointed", "😞"),
    ("pensive", "😔"),
    ("worried", "😟"),
    ("confused", "😕"),
    ("frowning_face", "☹️"),
    ("persevere", "😣"),
    ("tired_face", "😫"),
    ("pleading_face", "🥺"),
    ("cry", "😢"),
    ("sob", "😭"),
    ("triumph", "😤"),
    ("angry", "😠"),
    ("rage", "😡"),
    ("exploding_head", "🤯"),
    ("flushed", "😳"),
    ("hot_face", "🥵"),
    ("cold_face", "🥶"),
    ("scream", "😱"),
    ("fearful", "😨"),
    ("thinking", "🤔"),
    ("shushing_face", "🤫"),
    ("lying_face", "🤥"),
    ("no_mouth", "😶"),
    ("neutral_face", "😐"),
    ("expressionless", "😑"),
    ("grimacing", "😬"),
    ("roll_eyes", "🙄"),
    ("hushed", "😯"),
    ("sleeping", "😴"),
    ("drooling_face", "🤤"),
    ("dizzy_face", "😵"),
    ("mask", "😷"),
    ("nauseated_face", "🤢"),
    ("sneezing_face", "🤧"),
    ("cowboy_hat_face", "🤠"),
    ("clown_face", "🤡"),
    ("ghost", "👻"),
    ("skull", "💀"),
    ("alien", "👽"),
    ("robot", "🤖"),
    ("poop", "💩"),
    ("smiley_cat", "😺"),
    ("smile_cat", "😸"),
    ("heart_eyes_cat", "😻"),
    ("scream_cat", "🙀"),
    ("crying_cat_face", "😿"),
    ("see_no_evil", "🙈"),
    ("hear_no_evil", "🙉"),
    ("speak_no_evil", "🙊"),
    ("wave", "👋"),
    ("raised_hand", "✋"),
    ("ok_hand", "👌"),
    ("v", "✌️"),
    ("crossed_fingers", "🤞"),
    ("thumbsup", "👍"),
    ("thumbsdown", "👎"),
    ("fist", "👊"),
    ("clap", "👏"),
    ("raised_hands", "🙌"),
    ("pray", "🙏"),
    ("muscle", "💪"),
    ("brain", "🧠"),
    ("eyes", "👀"),
    ("heart", "❤️"),
    ("orange_heart", "🧡"),
    ("yellow_heart", "💛"),
    ("green_heart", "💚"),
    ("blue_heart", "💙"),
    ("purple_heart", "💜"),
    ("black_heart", "🖤"),
    ("broken_heart", "💔"),
    ("sparkling_heart", "💖"),
    ("fire", "🔥"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("zap", "⚡"),
    ("boom", "💥"),
    ("sunny", "☀️"),
    ("cloud", "☁️"),
    ("rainbow", "🌈"),
    ("snowflake", "❄️"),
    ("umbrella", "☔"),
    ("ocean", "🌊"),
    ("dog", "🐶"),
    ("cat", "🐱"),
    ("mouse", "🐭"),
    ("rabbit", "🐰"),
    ("fox_face", "🦊"),
    ("bear", "🐻"),
    ("panda_face", "🐼"),
    ("koala", "🐨"),
    ("tiger", "🐯"),
    ("lion", "🦁"),
    ("cow", "🐮"),
    ("pig", "🐷"),
    ("frog", "🐸"),
    ("monkey_face", "🐵"),
    ("chicken", "🐔"),
    ("penguin", "🐧"),
    ("bird", "🐦"),
    ("owl", "🦉"),
    ("turtle", "🐢"),
    ("snake", "🐍"),
    ("octopus", "🐙"),
    ("whale", "🐳"),
    ("dolphin", "🐬"),
    ("butterfly", "🦋"),
    ("bee", "🐝"),
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("grapes", "🍇"),
    ("watermelon", "🍉"),
    ("pizza", "🍕"),
    ("hamburger", "🍔"),
    ("coffee", "☕"),
    ("tea", "🍵"),
    ("cake", "🍰"),
    ("rocket", "🚀"),
    ("atom_symbol", "⚛️"),
    ("gear", "⚙️"),
    ("wrench", "🔧"),
    ("hammer", "🔨"),
    ("link", "🔗"),
    ("lock", "🔒"),
    ("key", "🔑"),
    ("bulb", "💡"),
    ("computer", "💻"),
    ("keyboard", "⌨️"),
    ("package", "📦"),
    ("memo", "📝"),
    ("bookmark", "🔖"),
    ("books", "📚"),
    ("bell", "🔔"),
    ("hourglass", "⌛"),
    ("mag", "🔍"),
    ("chart_with_upwards_trend", "📈"),
    ("white_check_mark", "✅"),
    ("x", "❌"),
    ("warning", "⚠️"),
    ("recycle", "♻️"),
    ("checkered_flag", "🏁"),
    ("trophy", "🏆"),
    ("dart", "🎯"),
    ("video_game", "🎮"),
    ("art", "🎨"),
    ("musical_note", "🎵"),
];
