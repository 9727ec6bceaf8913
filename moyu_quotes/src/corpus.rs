use moyu_models::{
    language::Language,
    quote::{Quote, QuoteId},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("A quote corpus needs at least one quote")]
    Empty,
}

/// Ordered, non-empty list of quotes. The order defines the daily rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCorpus {
    quotes: Vec<Quote>,
}

impl QuoteCorpus {
    pub fn new(quotes: Vec<Quote>) -> Result<Self, CorpusError> {
        if quotes.is_empty() {
            return Err(CorpusError::Empty);
        }

        Ok(Self { quotes })
    }

    pub fn builtin() -> Self {
        let quotes = BUILTIN_QUOTES
            .iter()
            .map(|(id, texts)| Quote::new(*id, texts.iter().copied()))
            .collect();

        Self { quotes }
    }

    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn lookup(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }
}

impl Default for QuoteCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_QUOTES: [(QuoteId, [(Language, &str); 4]); 20] = [
    (
        1,
        [
            (Language::English, "Overtime today? Congrats on upgrading your boss’s car."),
            (Language::SimplifiedChinese, "今天加班？恭喜你为老板的新车出了一份力。"),
            (Language::Spanish, "¿Horas extra hoy? Felicidades, ya contribuiste para el coche nuevo de tu jefe."),
            (Language::Japanese, "今日も残業？上司の新車をグレードアップしてあげたね。"),
        ],
    ),
    (
        2,
        [
            (Language::English, "Spend time on people who matter; KPIs won’t give your eulogy."),
            (Language::SimplifiedChinese, "把时间花给重要的人，KPI 不会在你葬礼上致辞。"),
            (Language::Spanish, "Dedica tiempo a quienes importan; ningún KPI hablará en tu funeral."),
            (Language::Japanese, "大切な人に時間を使って。KPIはあなたの葬式で弔辞を読まない。"),
        ],
    ),
    (
        6,
        [
            (Language::English, "Your boss’s dream isn’t your life mission."),
            (Language::SimplifiedChinese, "老板的梦想不等于你的人生目标。"),
            (Language::Spanish, "El sueño de tu jefe no es tu misión de vida."),
            (Language::Japanese, "上司の夢は、あなたの人生目標じゃない。"),
        ],
    ),
    (
        9,
        [
            (Language::English, "Work is for survival; ‘slacking’ is for living."),
            (Language::SimplifiedChinese, "工作是谋生，摸鱼是生活。"),
            (Language::Spanish, "Trabajar es para sobrevivir; “holgazanear” es para vivir."),
            (Language::Japanese, "仕事は生きるため、サボりは生きている実感のため。"),
        ],
    ),
    (
        10,
        [
            (Language::English, "You work hard so your boss can live the dream life."),
            (Language::SimplifiedChinese, "你努力工作，老板才能过上梦想生活。"),
            (Language::Spanish, "Trabajas duro para que tu jefe viva como quiere."),
            (Language::Japanese, "あなたが必死に働くから、上司は望む生活を送れる。"),
        ],
    ),
    (
        12,
        [
            (Language::English, "Slacking isn’t lazy; it’s a protective mechanism evolved for human survival."),
            (Language::SimplifiedChinese, "摸鱼不是懒，是人类为了生存进化出的保护机制。"),
            (Language::Spanish, "Holgazanear no es pereza; es un mecanismo de defensa evolucionado para sobrevivir."),
            (Language::Japanese, "サボりは怠けじゃない。生き残るために進化した防御反応だ。"),
        ],
    ),
    (
        13,
        [
            (Language::English, "You are essential to the company, right up until you ask for a raise."),
            (Language::SimplifiedChinese, "你对公司很重要，直到你要求加薪的那一刻。"),
            (Language::Spanish, "Eres vital para la empresa… hasta que pides un aumento."),
            (Language::Japanese, "君は会社にとって重要——給料アップを願い出るその瞬間までは。"),
        ],
    ),
    (
        15,
        [
            (Language::English, "Trade your health for money, and you'll just trade that money back for health. If you’re lucky."),
            (Language::SimplifiedChinese, "拿命换钱，最后都得拿钱换命。前提是，你还有命。"),
            (Language::Spanish, "Cambias vida por dinero y luego dinero por vida, si es que aún te queda vida."),
            (Language::Japanese, "命を削って稼いだ金は、結局命を買い戻すために使う。命が残っていればね。"),
        ],
    ),
    (
        16,
        [
            (Language::English, "If a job is meaningless, leaving on time is the highest respect you can pay it."),
            (Language::SimplifiedChinese, "如果一份工作毫无意义，那准时下班就是你对它最大的尊重。"),
            (Language::Spanish, "Si un trabajo no tiene sentido, salir a tiempo es el mayor respeto."),
            (Language::Japanese, "意味のない仕事なら、定時で帰るのが最大の敬意。"),
        ],
    ),
    (
        17,
        [
            (Language::English, "The world is so big, yet you only see your computer screen."),
            (Language::SimplifiedChinese, "世界那么大，你却只看得见你的电脑屏幕。"),
            (Language::Spanish, "El mundo es enorme y solo miras la pantalla."),
            (Language::Japanese, "世界はこんなに広いのに、君は画面しか見てない。"),
        ],
    ),
    (
        18,
        [
            (Language::English, "Stop pretending to work at your desk; go to the cafe downstairs and genuinely zone out."),
            (Language::SimplifiedChinese, "别在办公室假装努力，去楼下咖啡馆真诚地发呆。"),
            (Language::Spanish, "No finjas trabajar en la oficina; baja al café y desconecta de verdad."),
            (Language::Japanese, "オフィスで頑張ってるフリはやめて、下のカフェで堂々とぼーっとしよう。"),
        ],
    ),
    (
        19,
        [
            (Language::English, "Even the donkey turning the millstone gets a break."),
            (Language::SimplifiedChinese, "拉磨的驴都还有休息的时候呢。"),
            (Language::Spanish, "Hasta el burro del molino descansa."),
            (Language::Japanese, "石臼を引くロバだって休憩はある。"),
        ],
    ),
    (
        20,
        [
            (Language::English, "The company will (probably) run without you. Your life won’t."),
            (Language::SimplifiedChinese, "没有你，公司（大概）也能转。没有你，你的生活就停了。"),
            (Language::Spanish, "Sin ti la empresa (probablemente) sigue. Sin ti, tu vida se detiene."),
            (Language::Japanese, "君がいなくても会社は（たぶん）回る。君がいなければ君の人生は止まる。"),
        ],
    ),
    (
        24,
        [
            (Language::English, "‘Going above and beyond’ is reserved for ‘above and beyond’ pay."),
            (Language::SimplifiedChinese, "“超越期待”是给“超越的薪水”准备的。"),
            (Language::Spanish, "“Superar expectativas” es para sueldos que también las superan."),
            (Language::Japanese, "期待を超えるのは、給料も超えてからでいい。"),
        ],
    ),
    (
        27,
        [
            (Language::English, "Quietly quitting in spirit, so my body can physically continue to collect a salary here."),
            (Language::SimplifiedChinese, "精神离职，是为了肉体能更久地在此地领薪。"),
            (Language::Spanish, "Renuncio en espíritu para que mi cuerpo siga cobrando."),
            (Language::Japanese, "心だけ退職しておけば、体はここで給料をもらい続けられる。"),
        ],
    ),
    (
        28,
        [
            (Language::English, "Dumbest move ever: keeping your head down and hoping the boss promotes you."),
            (Language::SimplifiedChinese, "世界上最蠢的事：闷头做事，等老板主动提拔。"),
            (Language::Spanish, "Lo más tonto: trabajar en silencio esperando que tu jefe te ascienda solo."),
            (Language::Japanese, "世界で一番愚かなことは、ひたすら働いて上司が勝手に昇進させてくれるのを待つこと。"),
        ],
    ),
    (
        30,
        [
            (Language::English, "The company says ‘We are family’ — the kind of family that can fire you at any moment."),
            (Language::SimplifiedChinese, "公司说“我们是家人”，一种随时可以把你踢出家门的家人。"),
            (Language::Spanish, "La empresa dice ‘Somos familia’… el tipo de familia que te puede despedir en cualquier momento."),
            (Language::Japanese, "会社は「我々は家族だ」と言う。いつでも君を勘当できるタイプの家族だ。"),
        ],
    ),
    (
        31,
        [
            (Language::English, "The only reward for hard work... is more work."),
            (Language::SimplifiedChinese, "努力工作的唯一回报，就是更多的工作。"),
            (Language::Spanish, "La única recompensa por el trabajo duro... es más trabajo."),
            (Language::Japanese, "努力がもたらす唯一の報酬は…さらなる仕事だ。"),
        ],
    ),
    (
        33,
        [
            (Language::English, "If I did nothing for an entire month, (probably) no one would even notice."),
            (Language::SimplifiedChinese, "如果我一个月什么也不做，（可能）根本没人会发现。"),
            (Language::Spanish, "Si no hiciera nada durante un mes entero, (probablemente) nadie se daría cuenta."),
            (Language::Japanese, "もし一ヶ月丸ごと何もしなくても、（たぶん）誰も気づかないだろう。"),
        ],
    ),
    (
        35,
        [
            (Language::English, "Every 'urgent, top priority' request will end up sitting peacefully in the boss's inbox for three days."),
            (Language::SimplifiedChinese, "每一个“十万火急”的需求，最后都会在老板的收件箱里安详地躺三天。"),
            (Language::Spanish, "Cada solicitud ‘urgente y prioritaria’ terminará reposando tranquilamente en la bandeja de entrada del jefe por tres días."),
            (Language::Japanese, "すべての「最優先」リクエストは、上司の受信トレイで三日間安らかに眠ることになる。"),
        ],
    ),
];
