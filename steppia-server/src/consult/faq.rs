//! Static FAQ table
//!
//! Ordered `(keyword, answer)` pairs. The first keyword, in declaration
//! order, contained in the question wins.

pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    ("40代", "40代は人生経験が強みです。即戦力としての落ち着きをアピールしましょう。"),
    ("未経験", "「未経験」を「伸びしろ」と捉え、新しいことを吸収する意欲を伝えましょう。"),
    ("自信がない", "小さな成功体験を積み重ねることが大切です。まずは今日一歩踏み出した自分を褒めましょう。"),
    ("ブランク", "家事や育児で培った「段取り力」や「忍耐力」も立派なキャリアです。"),
    ("年齢制限", "法律で年齢制限は禁止されています。スキルと意欲があればチャンスは必ずあります。"),
    ("リスキリング", "デジタルスキルを身につけると事務職やIT職など選択肢が大きく広がります。"),
    ("Python", "初心者でも学びやすい言語です。自動化スキルは事務職でも重宝されます。"),
    ("Excel", "VLOOKUPやピボットテーブルができると、採用率がグッと上がります。"),
    ("AI", "AIを使いこなせる人材は今、非常に求められています。まずは触れてみることから！"),
    ("デザイン", "CanvaやPenpotなど、初心者向けのツールから始めると楽しく学べます。"),
    ("履歴書", "手書きよりパソコン作成が一般的です。清潔感のある写真を用意しましょう。"),
    ("職務経歴書", "「何をしてきたか」だけでなく「何ができるか」を具体的に書きましょう。"),
    ("自己PR", "自分の強みが会社にどう貢献できるか、具体例を交えて伝えましょう。"),
    ("志望動機", "「なぜこの会社なのか」を自分の言葉で語ることが内定への道です。"),
    ("面接", "面接は対話です。笑顔と元気な挨拶があれば、第一印象はバッチリです。"),
    ("オンライン面接", "背景や照明に気をつけ、カメラを見て話すと意欲が伝わります。"),
    ("逆質問", "「入社までに準備しておくことは？」など、前向きな質問を用意しましょう。"),
    ("シングルマザー", "理解のある企業は増えています。自治体の助成金なども活用しましょう。"),
    ("両立", "最初から100%を目指さず、周りの協力や便利なサービスを頼るのも戦略です。"),
    ("時短勤務", "ライフスタイルに合わせた働き方を相談できる企業を一緒に探しましょう。"),
    ("在宅ワーク", "通勤がない分、家庭の時間が持てます。ITスキルがあると採用されやすいです。"),
    ("副業", "まずは月1〜3万円を目指して、得意なことから始めてみるのがおすすめです。"),
    ("ワークライフバランス", "仕事も家庭も大切にするために、優先順位を決めておきましょう。"),
    ("給料", "相場を知ることは大切です。スキルを上げて昇給を目指す道もあります。"),
    ("福利厚生", "育休や介護休暇の取得実績があるかチェックしておくと安心です。"),
    ("正社員", "安定を求めるなら正社員ですが、まずは派遣やパートから進む道もあります。"),
    ("派遣", "短期間でスキルを身につけたい時や、色々な職場を経験したい時に有効です。"),
    ("パート", "時間の融通が利きやすいのが魅力。ブランク明けの復帰に最適です。"),
    ("失業保険", "ハローワークで手続きが必要です。受給しながらの活動も可能です。"),
    ("社会保険", "106万円や130万円の壁を意識しつつ、保障の手厚い加入を目指すのも手です。"),
    ("有給休暇", "パートやアルバイトでも条件を満たせば取得できます。大切な権利です。"),
    ("最低賃金", "最低賃金は年々上がっています。基準を下回っていないか確認しましょう。"),
    ("資格", "実務に直結する資格から取るのが効率的です。コンサルタントに相談してください。"),
    ("マネジメント", "後輩の指導経験などもマネジメント経験として評価されます。"),
    ("転職回数", "多いことを気にするより、その経験をどう活かすかを前向きに伝えましょう。"),
    ("キャリアチェンジ", "今のスキルをベースに、隣接する職種へスライドするのがスムーズです。"),
    ("緊張", "「緊張するのは頑張りたい証拠」と受け入れて、深呼吸をしましょう。"),
    ("不採用", "あなたの価値を否定されたわけではありません。縁がなかっただけと切り替えましょう。"),
    ("焦り", "周りと比べず、自分のペースで進むことが一番の近道です。"),
    ("人間関係", "新しい職場では「聞き上手」から始めると、馴染みやすくなります。"),
    ("コンサルタント", "迷ったらすぐに相談してください。私たちはあなたの味方です。"),
    ("冒険マップ", "ログをつけると進みます。毎日の積み重ねがゴールへの道です。"),
    ("ルーレット", "毎日の楽しみとして活用してください。お得なクーポンも当たります。"),
    ("お仕事ログ", "日々の頑張りを記録しましょう。自分の成長が目に見えてわかります。"),
    ("求人", "Steppiaには未経験や40代歓迎の求人を厳選して掲載しています。"),
    ("ログ", "記録をつける習慣が、あなたの「継続力」の証明になります。"),
    ("マップ", "STEP 30を目指して進みましょう。ゴールには素敵な演出が待っています！"),
    ("相談", "どんな小さなことでもOK。AI相談室やコンサルタントを頼ってください。"),
    ("未来", "一歩踏み出した今、あなたの未来はすでに変わり始めています。"),
    ("気分転換", "時には休むことも大切です。お気に入りの飲み物を飲んでリフレッシュしましょう。"),
];

/// First entry whose keyword occurs in `question`
pub fn lookup(question: &str) -> Option<&'static str> {
    FAQ_ENTRIES
        .iter()
        .find(|(keyword, _)| question.contains(keyword))
        .map(|(_, answer)| *answer)
}
