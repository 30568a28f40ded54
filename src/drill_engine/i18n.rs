//! Bilingual (English / Vietnamese) text table.
//!
//! Entries are addressed by `(language, module, key)`. A lookup falls back to
//! the default language and finally to the key itself, so generators can
//! never fail on a missing string. Sentence entries are templates with
//! `{name}` placeholders, filled by [`helpers::fill`](super::helpers::fill).

use crate::drill_engine::models::Language;

/// Look up `key` in `module` for a language code such as `"en"` or `"vi"`.
///
/// Unregistered languages and missing keys fall back to English; a key that
/// English lacks too is returned verbatim.
pub fn translate<'a>(module: &str, key: &'a str, language: &str) -> &'a str {
    let found: Option<&'a str> = Language::from_code(language)
        .and_then(|lang| lookup(lang, module, key))
        .or_else(|| lookup(Language::DEFAULT, module, key));
    found.unwrap_or(key)
}

/// Typed form of [`translate`] used by the generators.
pub fn t<'a>(lang: Language, module: &str, key: &'a str) -> &'a str {
    translate(module, key, lang.code())
}

fn lookup(lang: Language, module: &str, key: &str) -> Option<&'static str> {
    match lang {
        Language::En => english(module, key),
        Language::Vi => vietnamese(module, key),
    }
}

fn english(module: &str, key: &str) -> Option<&'static str> {
    let s = match (module, key) {
        // ── counting ──────────────────────────────────────────────────────
        ("counting", "count_on")          => "There are {start} {items} {emoji}. You get {step} more. How many now?",
        ("counting", "count_back_fly")    => "You have {start} {items} {emoji}. {step} fly away. How many left?",
        ("counting", "count_back_give")   => "Princess has {start} {items} {emoji}. She gives {step} to her friend. How many remain?",
        ("counting", "count_back_vanish") => "There are {start} {items} {emoji}. {step} disappear. What's left?",
        ("counting", "skip_count")        => "Skip counting by {skip}s: {sequence}, ___. What's next?",
        ("counting", "hint_count_on")     => "Start at {start}, then count forward {step} more",
        ("counting", "hint_count_back")   => "Start at {start}, count back {step}",
        ("counting", "hint_skip")         => "Add {skip} to the last number",

        // ── shared nouns ──────────────────────────────────────────────────
        ("items", "apples")      => "apples",
        ("items", "stars")       => "stars",
        ("items", "flowers")     => "flowers",
        ("items", "butterflies") => "butterflies",
        ("items", "balloons")    => "balloons",
        ("items", "candies")     => "candies",
        ("items", "gems")        => "gems",
        ("items", "bunnies")     => "bunnies",
        ("items", "cupcakes")    => "cupcakes",

        // ── arithmetic ────────────────────────────────────────────────────
        ("arithmetic", "add_word")  => "Princess has {a} {items} {emoji}. She {action} {b} more. How many total?",
        ("arithmetic", "add_bare")  => "{a} + {b} = ?",
        ("arithmetic", "sub_word")  => "You have {a} {items} {emoji}. You {remove} {b}. How many left?",
        ("arithmetic", "sub_bare")  => "{a} - {b} = ?",
        ("arithmetic", "hint_add")  => "Add ones first, then tens: {a} + {b}",
        ("arithmetic", "hint_sub")  => "Start at {a}, count back {b}",
        ("arithmetic", "picked")    => "picked",
        ("arithmetic", "collected") => "collected",
        ("arithmetic", "found")     => "found",
        ("arithmetic", "baked")     => "baked",
        ("arithmetic", "got")       => "got",
        ("arithmetic", "ate")       => "ate",
        ("arithmetic", "gave_away") => "gave away",
        ("arithmetic", "wilted")    => "wilted",
        ("arithmetic", "shared")    => "shared",
        ("arithmetic", "lost")      => "lost",
        ("arithmetic", "popped")    => "popped",

        // ── numbers ───────────────────────────────────────────────────────
        ("numbers", "how_many_tens")   => "In the number {num}, how many TENS are there?",
        ("numbers", "how_many_ones")   => "In the number {num}, how many ONES are there?",
        ("numbers", "hint_place")      => "{num} = {tens} tens and {ones} ones",
        ("numbers", "blank_tens")      => "{num} = ___ + {ones}. What goes in the blank?",
        ("numbers", "blank_ones")      => "{num} = {tens} + ___. What goes in the blank?",
        ("numbers", "hint_blank_tens") => "Think: what number added to {ones} gives {num}?",
        ("numbers", "hint_blank_ones") => "Think: {num} minus {tens} equals what?",
        ("numbers", "write_as_number") => "Write \"{word}\" as a number:",
        ("numbers", "hint_sound")      => "Sound it out: tens first, then ones",
        ("numbers", "word_11") => "eleven",
        ("numbers", "word_12") => "twelve",
        ("numbers", "word_15") => "fifteen",
        ("numbers", "word_20") => "twenty",
        ("numbers", "word_30") => "thirty",
        ("numbers", "word_25") => "twenty-five",
        ("numbers", "word_37") => "thirty-seven",
        ("numbers", "word_42") => "forty-two",
        ("numbers", "word_58") => "fifty-eight",
        ("numbers", "word_64") => "sixty-four",
        ("numbers", "word_73") => "seventy-three",
        ("numbers", "word_81") => "eighty-one",
        ("numbers", "word_99") => "ninety-nine",
        ("numbers", "word_44") => "forty-four",
        ("numbers", "word_66") => "sixty-six",

        // ── shapes ────────────────────────────────────────────────────────
        ("shapes", "what_is")             => "What is this shape? {icon}",
        ("shapes", "has_faces")           => "This shape has {faces} faces. What is it?",
        ("shapes", "can_roll_no_corners") => "This shape can roll and has no corners. What is it?",
        ("shapes", "has_vertices")        => "This shape has {vertices} vertices and cannot roll. What is it?",
        ("shapes", "what_3d")             => "What 3D shape is {article} {example}?",
        ("shapes", "which_rolls")         => "Which of these shapes can roll?",
        ("shapes", "how_many_faces")      => "How many faces does a {shape} have?",
        ("shapes", "a_has_faces")         => "A {shape} {icon} has how many faces?",
        ("shapes", "yes")                 => "Yes",
        ("shapes", "hint_think")          => "Think about what {article} {example} looks like",
        ("shapes", "hint_overall")        => "Think about the overall shape of {article} {example}",
        ("shapes", "hint_rolls")          => "{shape}: {yes}! It has curved surfaces",
        ("shapes", "hint_curved")         => "It has curved surfaces",
        ("shapes", "hint_flat")           => "It has flat faces only",
        ("shapes", "hint_count")          => "Count each flat surface",
        ("shapes", "cube")                => "Cube",
        ("shapes", "cuboid")              => "Cuboid",
        ("shapes", "sphere")              => "Sphere",
        ("shapes", "cylinder")            => "Cylinder",
        ("shapes", "pyramid")             => "Pyramid",
        ("shapes", "ex_dice")             => "dice",
        ("shapes", "ex_ice_cube")         => "ice cube",
        ("shapes", "ex_rubiks_cube")      => "Rubik's cube",
        ("shapes", "ex_box")              => "box",
        ("shapes", "ex_brick")            => "brick",
        ("shapes", "ex_book")             => "book",
        ("shapes", "ex_ball")             => "ball",
        ("shapes", "ex_globe")            => "globe",
        ("shapes", "ex_marble")           => "marble",
        ("shapes", "ex_can")              => "can",
        ("shapes", "ex_pipe")             => "pipe",
        ("shapes", "ex_log")              => "log",
        ("shapes", "ex_egyptian_pyramid") => "Egyptian pyramid",
        ("shapes", "ex_tent")             => "tent",

        // ── multiply ──────────────────────────────────────────────────────
        ("multiply", "times_bare")  => "{table} × {multiplier} = ?",
        ("multiply", "hint_times")  => "{table} times {multiplier} means {table} added {multiplier} times",
        ("multiply", "groups")      => "There are {groups} bags. Each bag has {per} {emoji} {items}. How many total?",
        ("multiply", "hint_groups") => "{groups} groups of {per} = {groups} × {per}",
        ("multiply", "share")       => "Share {dividend} {emoji} {items} equally among {divisor} friends. How many each?",
        ("multiply", "divide_bare") => "{dividend} ÷ {divisor} = ?",
        ("multiply", "hint_divide") => "How many {divisor}s fit into {dividend}?",

        // ── money ─────────────────────────────────────────────────────────
        ("money", "coin_worth")        => "How many cents is one {coin} worth?",
        ("money", "coins_total")       => "You have {count} {coins}. How many cents total?",
        ("money", "hint_coin")         => "Remember: 1 {coin} = {value}¢",
        ("money", "hint_coins_total")  => "{count} × {value}¢ = ?",
        ("money", "price_read")        => "The {item} {emoji} costs {price}. How do you read this?",
        ("money", "dollars_and_cents") => "{dollars} dollars and {cents} cents",
        ("money", "dollars_only")      => "{dollars} dollars only",
        ("money", "hint_before_dot")   => "Before the dot is dollars, after is cents",
        ("money", "change")            => "A {item} {emoji} costs ${cost}. You pay ${paid}. What's your change?",
        ("money", "hint_change")       => "${paid} - ${cost} = ?",
        ("money", "penny")             => "penny",
        ("money", "pennies")           => "pennies",
        ("money", "nickel")            => "nickel",
        ("money", "nickels")           => "nickels",
        ("money", "dime")              => "dime",
        ("money", "dimes")             => "dimes",
        ("money", "quarter")           => "quarter",
        ("money", "quarters")          => "quarters",
        ("money", "apple")             => "apple",
        ("money", "book")              => "book",
        ("money", "teddy_bear")        => "teddy bear",
        ("money", "pizza_slice")       => "pizza slice",
        ("money", "balloon")           => "balloon",
        ("money", "candy_bar")         => "candy bar",

        // ── calculations ──────────────────────────────────────────────────
        ("calc", "column_add")                => "Solve this column addition:",
        ("calc", "column_sub")                => "Solve this column subtraction:",
        ("calc", "column_exchange")           => "Solve with exchange (borrowing):",
        ("calc", "two_digit_exchange")        => "Subtract these 2-digit numbers (use exchange):",
        ("calc", "hint_column_add")           => "Add the ones first, then add the tens. {a} + {b} = ?",
        ("calc", "hint_column_sub")           => "Subtract the ones first, then subtract the tens. {a} − {b} = ?",
        ("calc", "hint_exchange")             => "You need to borrow! Take 1 ten from {tens} tens, add 10 to {ones} ones.",
        ("calc", "hint_two_digit")            => "Step 1: Borrow → {borrowed} − {b_ones} = {ones_result}. Step 2: {tens_left} − {b_tens} = {tens_result}",
        ("calc", "fact_family_addsub_q")      => "Which equation belongs to the fact family {a}, {b}, {c}?",
        ("calc", "hint_fact_family_addsub")   => "Use the same 3 numbers for + and −",
        ("calc", "inverse_q")                 => "If {fact}, then which is also true?",
        ("calc", "hint_inverse_addsub")       => "Subtraction undoes addition!",
        ("calc", "find_missing")              => "Find the missing number. {equation}",
        ("calc", "hint_use_inverse")          => "Use the inverse: {inverse}",
        ("calc", "fact_family_multdiv_q")     => "Which equation belongs to the fact family {a}, {b}, {c}?",
        ("calc", "hint_fact_family_multdiv")  => "Use the same 3 numbers for × and ÷",
        ("calc", "repeated_addition")         => "Write as multiplication: {sum}",
        ("calc", "hint_repeated")             => "Count how many times {value} appears: {count} times",
        ("calc", "double_of")                 => "What is double {n}?",
        ("calc", "half_of")                   => "What is half of {n}?",
        ("calc", "hint_double")               => "Doubling means adding to itself: {n} + {n}",
        ("calc", "hint_half")                 => "Half means divide by 2. Split {n} into two equal parts",
        ("calc", "double_then_half")          => "If you double {n} then halve the result, what do you get back?",
        ("calc", "hint_double_halve_inverse") => "Doubling and halving are inverse operations!",

        // ── quiz ──────────────────────────────────────────────────────────
        ("quiz", "correct")             => "✨ Correct! Great job! ✨",
        ("quiz", "not_quite")           => "❌ Not quite! Hint: {hint}",
        ("quiz", "answer_was")          => "❌ The answer was: {answer}. Hint: {hint}",
        ("quiz", "score_line")          => "{correct}/{total} Correct!",
        ("quiz", "verdict_outstanding") => "Outstanding! You're a math star!",
        ("quiz", "verdict_great")       => "Great work! Keep practicing!",
        ("quiz", "verdict_effort")      => "Good effort! Try again to improve!",
        ("quiz", "rank_up")             => "🎉 Rank Up! 🎉 You are now a \"{rank}\"! Amazing!",
        ("quiz", "rank_seedling")       => "Little Seedling",
        ("quiz", "rank_blossom")        => "Pretty Blossom",
        ("quiz", "rank_princess")       => "Flower Princess",
        ("quiz", "rank_fairy")          => "Magic Fairy",
        ("quiz", "rank_queen")          => "Math Queen",

        _ => return None,
    };
    Some(s)
}

fn vietnamese(module: &str, key: &str) -> Option<&'static str> {
    let s = match (module, key) {
        ("counting", "count_on")          => "Có {start} {items} {emoji}. Bạn nhận thêm {step} nữa. Bây giờ có bao nhiêu?",
        ("counting", "count_back_fly")    => "Bạn có {start} {items} {emoji}. {step} bay đi. Còn lại bao nhiêu?",
        ("counting", "count_back_give")   => "Công chúa có {start} {items} {emoji}. Con tặng bạn {step}. Còn lại bao nhiêu?",
        ("counting", "count_back_vanish") => "Có {start} {items} {emoji}. {step} biến mất. Còn lại bao nhiêu?",
        ("counting", "skip_count")        => "Đếm nhảy {skip}: {sequence}, ___. Số tiếp theo?",
        ("counting", "hint_count_on")     => "Bắt đầu từ {start}, rồi đếm tiếp {step} số",
        ("counting", "hint_count_back")   => "Bắt đầu từ {start}, đếm lùi {step}",
        ("counting", "hint_skip")         => "Cộng {skip} vào số cuối",

        ("items", "apples")      => "quả táo",
        ("items", "stars")       => "ngôi sao",
        ("items", "flowers")     => "bông hoa",
        ("items", "butterflies") => "con bướm",
        ("items", "balloons")    => "quả bóng bay",
        ("items", "candies")     => "viên kẹo",
        ("items", "gems")        => "viên ngọc",
        ("items", "bunnies")     => "chú thỏ",
        ("items", "cupcakes")    => "bánh cupcake",

        ("arithmetic", "add_word")  => "Công chúa có {a} {items} {emoji}. Công chúa {action} thêm {b}. Tổng cộng bao nhiêu?",
        ("arithmetic", "sub_word")  => "Bạn có {a} {items} {emoji}. Bạn {remove} {b}. Còn lại bao nhiêu?",
        ("arithmetic", "hint_add")  => "Cộng hàng đơn vị trước, sau đó hàng chục: {a} + {b}",
        ("arithmetic", "hint_sub")  => "Bắt đầu từ {a}, đếm lùi {b}",
        ("arithmetic", "picked")    => "hái",
        ("arithmetic", "collected") => "thu thập",
        ("arithmetic", "found")     => "tìm thấy",
        ("arithmetic", "baked")     => "nướng",
        ("arithmetic", "got")       => "nhận",
        ("arithmetic", "ate")       => "ăn mất",
        ("arithmetic", "gave_away") => "cho đi",
        ("arithmetic", "wilted")    => "làm héo",
        ("arithmetic", "shared")    => "chia",
        ("arithmetic", "lost")      => "mất",
        ("arithmetic", "popped")    => "làm nổ",

        ("numbers", "how_many_tens")   => "Trong số {num}, có bao nhiêu CHỤC?",
        ("numbers", "how_many_ones")   => "Trong số {num}, có bao nhiêu ĐƠN VỊ?",
        ("numbers", "hint_place")      => "{num} = {tens} chục và {ones} đơn vị",
        ("numbers", "blank_tens")      => "{num} = ___ + {ones}. Điền gì vào chỗ trống?",
        ("numbers", "blank_ones")      => "{num} = {tens} + ___. Điền gì vào chỗ trống?",
        ("numbers", "hint_blank_tens") => "Nghĩ: số nào cộng với {ones} ra {num}?",
        ("numbers", "hint_blank_ones") => "Nghĩ: {num} trừ {tens} bằng bao nhiêu?",
        ("numbers", "write_as_number") => "Viết \"{word}\" thành số:",
        ("numbers", "hint_sound")      => "Đọc: chục trước, đơn vị sau",
        ("numbers", "word_11") => "mười một",
        ("numbers", "word_12") => "mười hai",
        ("numbers", "word_15") => "mười lăm",
        ("numbers", "word_20") => "hai mươi",
        ("numbers", "word_30") => "ba mươi",
        ("numbers", "word_25") => "hai mươi lăm",
        ("numbers", "word_37") => "ba mươi bảy",
        ("numbers", "word_42") => "bốn mươi hai",
        ("numbers", "word_58") => "năm mươi tám",
        ("numbers", "word_64") => "sáu mươi tư",
        ("numbers", "word_73") => "bảy mươi ba",
        ("numbers", "word_81") => "tám mươi mốt",
        ("numbers", "word_99") => "chín mươi chín",
        ("numbers", "word_44") => "bốn mươi tư",
        ("numbers", "word_66") => "sáu mươi sáu",

        ("shapes", "what_is")             => "Đây là hình gì? {icon}",
        ("shapes", "has_faces")           => "Hình này có {faces} mặt. Đó là hình gì?",
        ("shapes", "can_roll_no_corners") => "Hình này lăn được và không có góc. Đó là gì?",
        ("shapes", "has_vertices")        => "Hình này có {vertices} đỉnh và không lăn được. Đó là gì?",
        ("shapes", "what_3d")             => "{example} là hình 3D nào?",
        ("shapes", "which_rolls")         => "Hình nào dưới đây lăn được?",
        ("shapes", "how_many_faces")      => "{shape} có bao nhiêu mặt?",
        ("shapes", "a_has_faces")         => "{shape} {icon} có bao nhiêu mặt?",
        ("shapes", "yes")                 => "Có",
        ("shapes", "hint_think")          => "Nghĩ về {example} trông như thế nào",
        ("shapes", "hint_overall")        => "Nghĩ về hình dạng tổng thể của {example}",
        ("shapes", "hint_rolls")          => "{shape}: {yes}! Nó có bề mặt cong",
        ("shapes", "hint_curved")         => "Nó có bề mặt cong",
        ("shapes", "hint_flat")           => "Nó chỉ có mặt phẳng",
        ("shapes", "hint_count")          => "Đếm từng mặt phẳng",
        ("shapes", "cube")                => "Hình lập phương",
        ("shapes", "cuboid")              => "Hình hộp chữ nhật",
        ("shapes", "sphere")              => "Hình cầu",
        ("shapes", "cylinder")            => "Hình trụ",
        ("shapes", "pyramid")             => "Hình chóp",
        ("shapes", "ex_dice")             => "xúc xắc",
        ("shapes", "ex_ice_cube")         => "viên đá",
        ("shapes", "ex_rubiks_cube")      => "khối Rubik",
        ("shapes", "ex_box")              => "cái hộp",
        ("shapes", "ex_brick")            => "viên gạch",
        ("shapes", "ex_book")             => "quyển sách",
        ("shapes", "ex_ball")             => "quả bóng",
        ("shapes", "ex_globe")            => "quả địa cầu",
        ("shapes", "ex_marble")           => "viên bi",
        ("shapes", "ex_can")              => "lon nước",
        ("shapes", "ex_pipe")             => "ống nước",
        ("shapes", "ex_log")              => "khúc gỗ",
        ("shapes", "ex_egyptian_pyramid") => "kim tự tháp Ai Cập",
        ("shapes", "ex_tent")             => "cái lều",

        ("multiply", "hint_times")  => "{table} nhân {multiplier} nghĩa là {table} cộng {multiplier} lần",
        ("multiply", "groups")      => "Có {groups} túi. Mỗi túi có {per} {emoji} {items}. Tổng cộng bao nhiêu?",
        ("multiply", "hint_groups") => "{groups} nhóm {per} = {groups} × {per}",
        ("multiply", "share")       => "Chia {dividend} {emoji} {items} đều cho {divisor} bạn. Mỗi người được bao nhiêu?",
        ("multiply", "hint_divide") => "Có bao nhiêu số {divisor} trong {dividend}?",

        ("money", "coin_worth")        => "Một đồng {coin} trị giá bao nhiêu xu?",
        ("money", "coins_total")       => "Bạn có {count} đồng {coins}. Tổng cộng bao nhiêu xu?",
        ("money", "hint_coin")         => "Nhớ: 1 đồng {coin} = {value}¢",
        ("money", "price_read")        => "{item} {emoji} giá {price}. Đọc thế nào?",
        ("money", "dollars_and_cents") => "{dollars} đô la và {cents} xu",
        ("money", "dollars_only")      => "chỉ {dollars} đô la",
        ("money", "hint_before_dot")   => "Trước dấu chấm là đô la, sau là xu",
        ("money", "change")            => "{item} {emoji} giá ${cost}. Bạn trả ${paid}. Tiền thối là bao nhiêu?",
        ("money", "penny")             => "1 xu",
        ("money", "pennies")           => "1 xu",
        ("money", "nickel")            => "5 xu",
        ("money", "nickels")           => "5 xu",
        ("money", "dime")              => "10 xu",
        ("money", "dimes")             => "10 xu",
        ("money", "quarter")           => "25 xu",
        ("money", "quarters")          => "25 xu",
        ("money", "apple")             => "Quả táo",
        ("money", "book")              => "Quyển sách",
        ("money", "teddy_bear")        => "Gấu bông",
        ("money", "pizza_slice")       => "Miếng pizza",
        ("money", "balloon")           => "Quả bóng bay",
        ("money", "candy_bar")         => "Thanh kẹo",

        ("calc", "column_add")                => "Giải phép cộng theo cột:",
        ("calc", "column_sub")                => "Giải phép trừ theo cột:",
        ("calc", "column_exchange")           => "Giải phép trừ có nhớ (mượn):",
        ("calc", "two_digit_exchange")        => "Trừ hai số có 2 chữ số (có nhớ):",
        ("calc", "hint_column_add")           => "Cộng hàng đơn vị trước, rồi cộng hàng chục. {a} + {b} = ?",
        ("calc", "hint_column_sub")           => "Trừ hàng đơn vị trước, rồi trừ hàng chục. {a} − {b} = ?",
        ("calc", "hint_exchange")             => "Bạn cần mượn! Lấy 1 chục từ {tens} chục, thêm 10 vào {ones} đơn vị.",
        ("calc", "hint_two_digit")            => "Bước 1: Mượn → {borrowed} − {b_ones} = {ones_result}. Bước 2: {tens_left} − {b_tens} = {tens_result}",
        ("calc", "fact_family_addsub_q")      => "Phương trình nào thuộc họ phép tính {a}, {b}, {c}?",
        ("calc", "hint_fact_family_addsub")   => "Dùng 3 số giống nhau cho + và −",
        ("calc", "inverse_q")                 => "Nếu {fact} thì điều nào cũng đúng?",
        ("calc", "hint_inverse_addsub")       => "Phép trừ đảo ngược phép cộng!",
        ("calc", "find_missing")              => "Tìm số còn thiếu. {equation}",
        ("calc", "hint_use_inverse")          => "Dùng phép nghịch đảo: {inverse}",
        ("calc", "fact_family_multdiv_q")     => "Phương trình nào thuộc họ phép tính {a}, {b}, {c}?",
        ("calc", "hint_fact_family_multdiv")  => "Dùng 3 số giống nhau cho × và ÷",
        ("calc", "repeated_addition")         => "Viết dưới dạng phép nhân: {sum}",
        ("calc", "hint_repeated")             => "Đếm bao nhiêu lần {value} xuất hiện: {count} lần",
        ("calc", "double_of")                 => "Gấp đôi của {n} là bao nhiêu?",
        ("calc", "half_of")                   => "Một nửa của {n} là bao nhiêu?",
        ("calc", "hint_double")               => "Gấp đôi nghĩa là cộng với chính nó: {n} + {n}",
        ("calc", "hint_half")                 => "Một nửa nghĩa là chia 2. Chia {n} thành hai phần bằng nhau",
        ("calc", "double_then_half")          => "Nếu gấp đôi {n} rồi chia đôi kết quả, bạn sẽ được lại số nào?",
        ("calc", "hint_double_halve_inverse") => "Gấp đôi và chia đôi là phép tính nghịch đảo!",

        ("quiz", "correct")             => "✨ Đúng rồi! Giỏi lắm! ✨",
        ("quiz", "not_quite")           => "❌ Chưa đúng! Gợi ý: {hint}",
        ("quiz", "answer_was")          => "❌ Đáp án là: {answer}. Gợi ý: {hint}",
        ("quiz", "score_line")          => "Đúng {correct}/{total}!",
        ("quiz", "verdict_outstanding") => "Xuất sắc! Con là ngôi sao toán học!",
        ("quiz", "verdict_great")       => "Làm tốt lắm! Tiếp tục luyện tập nhé!",
        ("quiz", "verdict_effort")      => "Cố gắng tốt! Thử lại để tiến bộ hơn!",
        ("quiz", "rank_up")             => "🎉 Lên hạng! 🎉 Con đã trở thành \"{rank}\"! Tuyệt vời!",
        ("quiz", "rank_seedling")       => "Mầm Non Bé Nhỏ",
        ("quiz", "rank_blossom")        => "Nụ Hoa Xinh Xắn",
        ("quiz", "rank_princess")       => "Công Chúa Hoa",
        ("quiz", "rank_fairy")          => "Tiên Nữ Phép Thuật",
        ("quiz", "rank_queen")          => "Nữ Hoàng Toán Học",

        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_language_wins() {
        assert_eq!(translate("shapes", "yes", "vi"), "Có");
        assert_eq!(translate("shapes", "yes", "en"), "Yes");
    }

    #[test]
    fn unregistered_language_falls_back_to_english() {
        assert_eq!(translate("shapes", "yes", "fr"), "Yes");
    }

    #[test]
    fn key_missing_in_vietnamese_falls_back_to_english() {
        // Bare equations are language-neutral and only registered once.
        assert_eq!(translate("arithmetic", "add_bare", "vi"), "{a} + {b} = ?");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        assert_eq!(translate("shapes", "hexagonal_prism", "vi"), "hexagonal_prism");
        assert_eq!(translate("no_such_module", "yes", "en"), "yes");
    }

    #[test]
    fn typed_lookup_matches_code_lookup() {
        assert_eq!(t(Language::Vi, "money", "dime"), translate("money", "dime", "vi"));
    }
}
