//! Bilingual content catalog for the site.
//!
//! Both locales instantiate the same `Content` struct, so key parity is
//! checked by the compiler; fixed-length arrays pin the section sizes the
//! layout depends on. The remaining data-dependent lengths (case-study
//! bullets, project items) are covered by [`validate`], which runs at boot
//! and in tests.

use crate::components::icons::Icon;

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    Kk,
}

impl Lang {
    /// Flips to the other supported locale. There is no general setter:
    /// the UI only ever rotates between the two.
    pub fn toggle(self) -> Self {
        match self {
            Lang::Ru => Lang::Kk,
            Lang::Kk => Lang::Ru,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::Kk => "kk",
        }
    }

    /// Label for the toggle button: shows the locale you would switch to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::Ru => "KZ",
            Lang::Kk => "RU",
        }
    }
}

/// Default locale at startup.
pub const DEFAULT_LANG: Lang = Lang::Ru;

#[derive(Debug, PartialEq, Eq)]
pub struct NavLabels {
    pub services: &'static str,
    pub about: &'static str,
    pub projects: &'static str,
    pub cases: &'static str,
    pub how: &'static str,
    pub pricing: &'static str,
    pub faq: &'static str,
    pub contact: &'static str,
}

/// One tile in the hero card. Icons are carried per entry instead of
/// being derived from the tile's position.
#[derive(Debug, PartialEq, Eq)]
pub struct Tile {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
    pub bullets: [&'static str; 5],
    pub perfect_for: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub badge: &'static str,
    pub headline: &'static str,
    pub bullets: &'static [&'static str],
    pub quote: &'static str,
    pub who: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub popular: bool,
    pub cta: &'static str,
    pub best_for: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Addon {
    pub title: &'static str,
    pub text: &'static str,
    pub price: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FinalCta {
    pub heading: &'static str,
    pub sub: &'static str,
    pub primary: &'static str,
    pub ghost: &'static str,
    pub chips: [&'static str; 3],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Misc {
    pub close: &'static str,
    pub back_home: &'static str,
    pub have_questions: &'static str,
    pub open_chat: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct About {
    pub title: &'static str,
    pub legal_heading: &'static str,
    pub legal_body: &'static str,
    pub intro: [&'static str; 2],
    pub what_heading: &'static str,
    pub what_items: [&'static str; 5],
    pub approach_heading: &'static str,
    pub approach_body: &'static str,
    pub security_heading: &'static str,
    pub security_body: &'static str,
    pub audience_heading: &'static str,
    pub audience_body: &'static str,
    pub closing: &'static str,
    pub closing_sub: &'static str,
}

/// A delivered-project card. Shapes vary between projects, hence the
/// options and the unsized item list.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub emoji: &'static str,
    pub title: &'static str,
    pub url: Option<&'static str>,
    pub url_label: Option<&'static str>,
    pub summary: &'static str,
    pub extra: Option<&'static str>,
    pub list_heading: &'static str,
    pub items: &'static [&'static str],
    pub client: Option<&'static str>,
    pub footnote: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LegalPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: [LegalSection; 5],
}

/// The full set of localized copy for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Content {
    pub nav: NavLabels,
    pub brand_tag: &'static str,
    pub hero_heading: &'static str,
    pub hero_sub: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub metrics: [&'static str; 3],
    pub tiles: [Tile; 4],
    pub security_note: &'static str,
    pub services_eyebrow: &'static str,
    pub services_title: &'static str,
    pub services: [Service; 6],
    pub cases_eyebrow: &'static str,
    pub cases_title: &'static str,
    pub cases: [CaseStudy; 7],
    pub how_eyebrow: &'static str,
    pub how_title: &'static str,
    pub how: [ProcessStep; 4],
    pub pricing_eyebrow: &'static str,
    pub pricing_title: &'static str,
    pub pricing: [Plan; 3],
    pub addons_title: &'static str,
    pub addons: [Addon; 3],
    pub tech_eyebrow: &'static str,
    pub tech_title: &'static str,
    pub tools_title: &'static str,
    pub local_title: &'static str,
    pub tools: [&'static str; 6],
    pub local: [&'static str; 6],
    pub faq_title: &'static str,
    pub faq: [FaqEntry; 8],
    pub final_cta: FinalCta,
    pub footer_tag: &'static str,
    pub footer_links: [&'static str; 7],
    pub misc: Misc,
    pub about: About,
    pub projects_title: &'static str,
    pub projects: [Project; 7],
    pub privacy: LegalPage,
    pub terms: LegalPage,
}

impl Content {
    /// Total O(1) lookup: every locale has a defined tree by construction.
    pub fn get(lang: Lang) -> &'static Content {
        match lang {
            Lang::Ru => &RU,
            Lang::Kk => &KK,
        }
    }
}

/// Checks the parity properties the type system cannot: paired
/// variable-length lists and the single "most popular" plan flag.
/// Runs once at boot, before the first render.
pub fn validate() -> Result<(), String> {
    let ru = Content::get(Lang::Ru);
    let kk = Content::get(Lang::Kk);

    for (i, (a, b)) in ru.cases.iter().zip(kk.cases.iter()).enumerate() {
        if a.bullets.len() != b.bullets.len() {
            return Err(format!(
                "case study {}: {} bullets in ru, {} in kk",
                i,
                a.bullets.len(),
                b.bullets.len()
            ));
        }
    }

    for (i, (a, b)) in ru.projects.iter().zip(kk.projects.iter()).enumerate() {
        if a.items.len() != b.items.len() {
            return Err(format!(
                "project {}: {} items in ru, {} in kk",
                i,
                a.items.len(),
                b.items.len()
            ));
        }
        if a.url != b.url {
            return Err(format!("project {}: link targets differ between locales", i));
        }
    }

    for (i, (a, b)) in ru.pricing.iter().zip(kk.pricing.iter()).enumerate() {
        if a.features.len() != b.features.len() {
            return Err(format!(
                "plan {}: {} features in ru, {} in kk",
                i,
                a.features.len(),
                b.features.len()
            ));
        }
        if a.popular != b.popular {
            return Err(format!("plan {}: popular flag differs between locales", i));
        }
    }

    for (lang, content) in [(Lang::Ru, ru), (Lang::Kk, kk)] {
        let popular = content.pricing.iter().filter(|p| p.popular).count();
        if popular != 1 {
            return Err(format!(
                "{}: expected exactly one popular plan, found {}",
                lang.code(),
                popular
            ));
        }
    }

    Ok(())
}

static RU: Content = Content {
    nav: NavLabels {
        services: "Услуги",
        about: "О нас",
        projects: "Проекты",
        cases: "Кейсы",
        how: "Как работаем",
        pricing: "Цены",
        faq: "FAQ",
        contact: "Контакт",
    },
    brand_tag: "Автоматизация и разработка с ИИ",
    hero_heading: "Перестаньте делать рутину. Пусть ИИ делает это за вас.",
    hero_sub: "Мы создаём умные системы, которые автоматизируют процессы, делают мощные сайты и обслуживают клиентов 24/7. Ваша команда растёт — ИИ берёт остальное.",
    cta_primary: "Бесплатный аудит",
    cta_secondary: "Смотреть демо",
    metrics: [
        "50+ проектов автоматизации",
        "−70% среднее снижение затрат",
        "Запуск за 2 недели",
    ],
    tiles: [
        Tile {
            icon: Icon::FileText,
            title: "AI → бизнес",
            text: "Документы, чат‑боты, отчёты, интеграции.",
        },
        Tile {
            icon: Icon::Bot,
            title: "Чат‑боты KZ/RU",
            text: "Поддержка и продажи 24/7.",
        },
        Tile {
            icon: Icon::BarChart,
            title: "Дашборды",
            text: "Метрики в реальном времени.",
        },
        Tile {
            icon: Icon::Workflow,
            title: "Автопотоки",
            text: "100+ интеграций и согласований.",
        },
    ],
    security_note: "Шифрование уровня банка • Хостинг в ДЦ РК",
    services_eyebrow: "Полные ИИ‑решения для современного бизнеса",
    services_title: "От чат‑ботов до сложных платформ — технологии, которые работают, пока вы спите",
    services: [
        Service {
            icon: Icon::FileText,
            title: "Навсегда избавьтесь от ручного ввода данных",
            desc: "ИИ читает, понимает и обрабатывает тысячи документов с точностью 99%+. Работает с PDF, сканами, Excel и изображениями.",
            bullets: [
                "Автовыделение данных из счетов и проверка",
                "Анализ договоров и ключевых условий",
                "Обработка форм любого формата",
                "Интеграции с 1C, Google Sheets и БД",
                "Пользовательские поля под ваш бизнес",
            ],
            perfect_for: "Бухгалтерии, банки, логистика, гос. подряд",
        },
        Service {
            icon: Icon::Bot,
            title: "Отвечайте клиентам 24/7 на казахском и русском",
            desc: "AI‑ассистент знает ваш бизнес и закрывает обращения круглосуточно. Снижайте расходы на поддержку на 70% и ускоряйте ответы.",
            bullets: [
                "Естественные диалоги (KZ, RU, EN)",
                "WhatsApp, Telegram, Instagram, сайт",
                "Обучение на ваших документах",
                "Заказы, брони, частые вопросы",
                "Передача оператору + аналитика",
            ],
            perfect_for: "E‑commerce, услуги, рестораны, отели, образование",
        },
        Service {
            icon: Icon::BarChart,
            title: "Преобразуйте данные в решения автоматически",
            desc: "Перестаньте делать отчёты вручную. Красивые дашборды и отчёты по расписанию с трендами и прогнозами.",
            bullets: [
                "Ежедневные/еженедельные/ежемесячные отчёты",
                "Панели с метриками в реальном времени",
                "Предиктивная аналитика и прогнозы",
                "Запросы на естественном языке",
                "Excel/Sheets/БД + алерты",
            ],
            perfect_for: "Ритейл, производство, финансы, агентства",
        },
        Service {
            icon: Icon::Workflow,
            title: "Свяжите ваши сервисы и уберите рутинные задачи",
            desc: "Кастомные AI‑воркфлоу перемещают данные, отправляют письма и обновляют системы — без ошибок.",
            bullets: [
                "Автописьма и фоллоу‑апы",
                "Синхронизация данных между платформами",
                "Согласования и уведомления",
                "Назначение задач и трекинг",
                "100+ бизнес‑интеграций",
            ],
            perfect_for: "Любой бизнес с повторяющимися цифровыми процессами",
        },
        Service {
            icon: Icon::Brain,
            title: "Лиды с приоритетом и автопродажи",
            desc: "ИИ оценивает лиды, шлёт персональные цепочки и сигналит, когда клиент готов покупать.",
            bullets: [
                "Автосбор лидов из разных источников",
                "AI‑скоринг и приоритизация",
                "Персональные письма и сообщения",
                "Автозапись на звонки/демо",
                "Интеграции с CRM и аналитика",
            ],
            perfect_for: "B2B, недвижимость, SaaS, консалтинг",
        },
        Service {
            icon: Icon::Users,
            title: "HR и рекрутинг на автопилоте",
            desc: "Сократите время найма на 60%: скрининг резюме, слоты интервью и онбординг.",
            bullets: [
                "Скрининг и ранжирование кандидатов",
                "Автопланирование интервью",
                "Коммуникации с кандидатами",
                "Онбординг и задачи",
                "Данные сотрудников и перформанс",
            ],
            perfect_for: "Растущие компании, агентства, HR‑отделы",
        },
    ],
    cases_eyebrow: "Доказанные результаты",
    cases_title: "Кейсы и истории успеха",
    cases: [
        CaseStudy {
            badge: "E-commerce — Косметика Yoko-Sun",
            headline: "Продажи выросли на 180% за первые 3 месяца",
            bullets: &[
                "Полноценный магазин с каталогом, корзиной",
                "Удобный интерфейс",
                "Интеграция с Kaspi.kz и платёжными системами",
                "SEO-оптимизация и высокая скорость загрузки",
            ],
            quote: "Создали профессиональный интернет-магазин с удобной админ-панелью. Продажи выросли на 180% за первые 3 месяца после запуска.",
            who: "Владелец Yoko-Sun",
        },
        CaseStudy {
            badge: "AI-боты — WhatsApp/Telegram автоматизация",
            headline: "85% запросов обрабатывает AI без участия человека",
            bullets: &[
                "Бронирование, заказы, FAQ на казахском и русском",
                "Интеграция с CRM и Google Sheets",
                "Окупаемость за 2-3 месяца",
                "Экономия на сотрудниках поддержки",
            ],
            quote: "Бот обрабатывает до 500 сообщений в день. Мы сэкономили на двух сотрудниках поддержки и улучшили время ответа до 5 секунд.",
            who: "Ресторан \"Достархан\", Алматы",
        },
        CaseStudy {
            badge: "Интеграция 1С — Автоматизация учёта",
            headline: "AI обработка документов + 1С интеграция",
            bullets: &[
                "Загрузка данных в 1С:Бухгалтерию за секунды",
                "GPT-4 Vision распознаёт документы с точностью 99,5%",
                "Полная автоматизация документооборота",
                "Автоматическая загрузка из Excel, CSV файлов",
                "Веб и мобильные отчёты в реальном времени",
                "Интеграция с eGov для электронной подписи через QR",
                "Автоматизация скриптов вместо ручного ввода",
            ],
            quote: "Раньше обработка 100 счетов занимала весь день. Теперь — 30 минут. Бухгалтер занимается анализом, а не вводом данных.",
            who: "Финансовый директор, ТОО \"Логистика+\"",
        },
        CaseStudy {
            badge: "Веб-разработка — Лендинги и сайты",
            headline: "Конверсия 12-18% (выше среднего на 2-3x)",
            bullets: &[
                "AI-генерация текстов на казахском и русском",
                "Современный дизайн и мобильная адаптация",
                "Интеграция форм с WhatsApp и Telegram",
                "Создание за 48 часов",
            ],
            quote: "За 2 дня получили готовый лендинг с интеграцией Kaspi Pay. Лиды пошли в первый же день. Окупили вложения за неделю.",
            who: "Стартап EdTech, Астана",
        },
        CaseStudy {
            badge: "HoReCa — QR-меню для ресторанов",
            headline: "+35% к среднему чеку благодаря upsell",
            bullets: &[
                "Сканируй QR → просматривай меню → заказывай онлайн",
                "Мультиязычность (KZ/RU/EN) с фото блюд",
                "Простое обновление через админ-панель",
                "Интерактивные цифровые меню",
            ],
            quote: "Клиенты любят QR-меню! Они видят фото, состав, калории. Официанты работают быстрее, а заказов стало больше.",
            who: "Кафе \"Тау\", сеть из 5 точек",
        },
        CaseStudy {
            badge: "Аналитика — Kaspi.kz Dashboard",
            headline: "+40% прибыли за счёт динамического ценообразования",
            bullets: &[
                "Отслеживание цен конкурентов в реальном времени",
                "Прогноз спроса и оптимальные цены с помощью AI",
                "Автоматические отчёты по продажам и остаткам",
                "Интеллектуальная аналитика",
            ],
            quote: "Платформа показывает, когда конкуренты меняют цены. Мы реагируем мгновенно и всегда остаёмся в топе. Прибыль выросла на 40%.",
            who: "Селлер электроники, Kaspi Top-50",
        },
        CaseStudy {
            badge: "AI Контент — Генерация текстов/изображений",
            headline: "Экономия ₸500К/месяц на контент-менеджере",
            bullets: &[
                "100 постов для соцсетей за 10 минут",
                "Описания товаров, статьи, рекламные тексты",
                "AI-изображения под ваш бренд через DALL-E/Midjourney",
                "Автоматическая публикация",
            ],
            quote: "Раньше нанимали копирайтера и дизайнера. Теперь AI создаёт контент за минуты. Качество отличное, а стоимость в 10 раз меньше.",
            who: "Маркетинговое агентство \"Brand Up\"",
        },
    ],
    how_eyebrow: "От идеи до запуска за 2–4 недели",
    how_title: "Как мы работаем",
    how: [
        ProcessStep {
            step: 1,
            title: "Бесплатный аудит (1‑я неделя)",
            text: "Анализ процессов, узких мест и ROI. Детальная карта автоматизации.",
        },
        ProcessStep {
            step: 2,
            title: "Дизайн решения (2‑я неделя)",
            text: "Схемы, источники данных, интеграции. Вы утверждаете перед разработкой.",
        },
        ProcessStep {
            step: 3,
            title: "Разработка и интеграции (3–4 недели)",
            text: "Строим, подключаем и обучаем ИИ на ваших данных. Вам без тех. хлопот.",
        },
        ProcessStep {
            step: 4,
            title: "Запуск и оптимизация (постоянно)",
            text: "Внедрение, обучение команды и ежемесячные отчёты по ROI.",
        },
    ],
    pricing_eyebrow: "Пакеты и индивидуальные сметы",
    pricing_title: "Прозрачно и под рост",
    pricing: [
        Plan {
            name: "Starter",
            price: "₸150,000",
            popular: false,
            cta: "14 дней бесплатно",
            best_for: "Рестораны, салоны, малый ритейл, услуги",
            features: &[
                "1 решение автоматизации (любой сервис)",
                "Базовый AI‑чатбот",
                "Email‑поддержка (≤24ч)",
                "Ежемесячные отчёты",
                "До 1 000 транзакций/мес",
            ],
        },
        Plan {
            name: "Business",
            price: "₸450,000",
            popular: true,
            cta: "Перейти на Business",
            best_for: "E‑commerce, услуги, производство, агентства",
            features: &[
                "До 5 решений автоматизации",
                "Продвинутый чатбот (кастом‑обучение)",
                "Приоритетная поддержка (≤4ч)",
                "Кастомные интеграции",
                "Еженедельная аналитика и оптимизация",
                "До 10 000 транзакций/мес",
                "API + аккаунт‑менеджер",
            ],
        },
        Plan {
            name: "Enterprise",
            price: "Custom",
            popular: false,
            cta: "Запросить смету",
            best_for: "Банки, телеком, госсектор, крупный ритейл",
            features: &[
                "Безлимитные решения автоматизации",
                "Enterprise‑ИИ и on‑prem",
                "Команда 24/7",
                "SLA 99,9% аптайма",
                "Аудиты безопасности и комплаенс",
                "Безлимит транзакций",
                "White‑label",
            ],
        },
    ],
    addons_title: "Дополнительные решения",
    addons: [
        Addon {
            title: "Сайт за 48 часов",
            text: "AI‑контент (KZ/RU), адаптивный дизайн, SEO, домен, интеграции WhatsApp/Telegram/Kaspi.",
            price: "₸50,000 – ₸200,000",
            cta: "Заказать сайт",
        },
        Addon {
            title: "Миграция данных",
            text: "Извлечение, очистка и перенос из Excel/PDF/бумаги/БД. Контроль качества + обучение.",
            price: "₸80,000 – ₸300,000",
            cta: "Перенести данные",
        },
        Addon {
            title: "Обучение кастомной модели",
            text: "Обучим модели на ваших данных для максимальной точности и релевантности.",
            price: "От ₸200,000",
            cta: "Обучить модель",
        },
    ],
    tech_eyebrow: "Enterprise‑уровень ИИ",
    tech_title: "Технологии и локальные интеграции",
    tools_title: "Глобальные инструменты",
    local_title: "Локальные интеграции",
    tools: [
        "GPT‑4 и Claude (NLP)",
        "LangChain для сложных сценариев",
        "Computer Vision для документов",
        "Кастомные ML‑модели",
        "Защита и шифрование",
        "Хостинг в ДЦ РК",
    ],
    local: [
        "Платежи Kaspi.kz",
        "1C бухгалтерия",
        "API Halyk Bank",
        "2GIS",
        "WhatsApp Business API",
        "Telegram Bot API",
    ],
    faq_title: "FAQ",
    faq: [
        FaqEntry {
            question: "Сколько длится внедрение?",
            answer: "Обычно 2–4 недели; простой чатбот — до недели; сложные интеграции — 4–6 недель. Даём детальный таймлайн на консультации.",
        },
        FaqEntry {
            question: "Поддерживаете казахский и русский?",
            answer: "Да. KZ и RU (и EN) с учётом локального контекста и сленга. Можно добавить другие языки.",
        },
        FaqEntry {
            question: "Интегрируетесь с нашими системами?",
            answer: "Да: 1C, Bitrix24, Kaspi, Google Workspace и проприетарные системы.",
        },
        FaqEntry {
            question: "Что если ИИ ошибётся?",
            answer: "Human‑in‑the‑loop, пороги уверенности и полный аудит действий.",
        },
        FaqEntry {
            question: "Данные в безопасности?",
            answer: "Шифрование банковского уровня, соответствие законам РК, on‑prem опция, NDA и DPA.",
        },
        FaqEntry {
            question: "Обучаете персонал?",
            answer: "Да, обучение и документация включены во все планы.",
        },
        FaqEntry {
            question: "Когда окупится?",
            answer: "Обычно 3–6 месяцев; документы и поддержка окупаются быстрее.",
        },
        FaqEntry {
            question: "Можно начать с малого?",
            answer: "Конечно. Стартуйте с одного решения и расширяйтесь.",
        },
    ],
    final_cta: FinalCta {
        heading: "Готовы автоматизировать бизнес?",
        sub: "Запишитесь на бесплатный аудит — посчитаем, сколько времени и денег вы сэкономите.",
        primary: "Бесплатный аудит",
        ghost: "Смотреть примеры",
        chips: ["Без карты", "14 дней бесплатно", "Гарантия возврата"],
    },
    footer_tag: "Автоматизация и разработка с ИИ в Казахстане",
    footer_links: [
        "Услуги",
        "Проекты",
        "Как работаем",
        "Цены",
        "Технологии",
        "Доп. решения",
        "FAQ",
    ],
    misc: Misc {
        close: "Закрыть",
        back_home: "На главную",
        have_questions: "Есть вопросы? Напишите нам в Telegram",
        open_chat: "Открыть чат",
    },
    about: About {
        title: "О компании",
        legal_heading: "Краткая юридическая информация",
        legal_body: "ИП Calipso. Местонахождение: Республика Казахстан, г. Алматы",
        intro: [
            "birqadam.kz — это технологическая компания, специализирующаяся на автоматизации бизнес-процессов и разработке интеллектуальных цифровых решений с использованием искусственного интеллекта.",
            "Мы помогаем компаниям отказаться от рутинных операций, повысить эффективность и сократить издержки за счёт внедрения умных систем: от чат-ботов и обработки документов до аналитических дашбордов, интеграций и сложных AI-платформ. Пока ваша команда занимается развитием бизнеса, технологии работают 24/7.",
        ],
        what_heading: "Чем мы занимаемся",
        what_items: [
            "автоматизация документооборота и обработки данных;",
            "AI-чат-боты для поддержки и продаж (KZ / RU);",
            "разработка сайтов и веб-платформ;",
            "аналитика и дашборды в реальном времени;",
            "кастомные AI-воркфлоу и интеграции с бизнес-системами (1C, CRM, базы данных, мессенджеры, платёжные сервисы).",
        ],
        approach_heading: "Наш подход",
        approach_body: "Мы сопровождаем клиента на всех этапах: от анализа процессов и проектирования решения до внедрения, обучения команды и дальнейшей оптимизации. Все решения разрабатываются под конкретные задачи бизнеса и масштабируются по мере роста.",
        security_heading: "Надёжность и безопасность",
        security_body: "Мы применяем современные методы защиты данных, шифрование уровня корпоративных стандартов и используем хостинг в дата-центрах на территории Республики Казахстан.",
        audience_heading: "Для кого мы работаем",
        audience_body: "Наши решения подходят для малого, среднего и крупного бизнеса, включая e-commerce, HoReCa, финансы, логистику, образование, B2B-сервисы и корпоративные проекты.",
        closing: "birqadam.kz — автоматизация и разработка с ИИ в Казахстане.",
        closing_sub: "От идеи до запуска — за 2–4 недели.",
    },
    projects_title: "Реализованные проекты",
    projects: [
        Project {
            emoji: "🛒",
            title: "E-commerce платформа — Yoko-Sun",
            url: Some("https://yoko-sun.kz"),
            url_label: Some("https://yoko-sun.kz"),
            summary: "Полноценный интернет-магазин с каталогом, корзиной и высокой скоростью загрузки. Проект ориентирован на рост конверсии и удобство управления контентом.",
            extra: None,
            list_heading: "Что реализовано:",
            items: &[
                "современный адаптивный интерфейс",
                "SEO-оптимизация",
                "интеграции с платёжными сервисами",
                "удобная административная панель",
            ],
            client: None,
            footnote: None,
        },
        Project {
            emoji: "📚",
            title: "Онлайн-журнал с приёмом статей — Kunaev University",
            url: Some("https://bulletin-law.vuzkunaeva.kz/"),
            url_label: Some("https://bulletin-law.vuzkunaeva.kz/"),
            summary: "Цифровая платформа для научного журнала, принимающая статьи онлайн и полностью автоматизирующая редакционный процесс.",
            extra: None,
            list_heading: "Функциональность:",
            items: &[
                "онлайн-приём статей",
                "модерация и рецензирование",
                "управление выпусками журнала",
                "публикация материалов в электронных изданиях",
            ],
            client: Some("Клиент: Kunaev University"),
            footnote: None,
        },
        Project {
            emoji: "💬",
            title: "WhatsApp-бот с ИИ для университета",
            url: Some("https://wa.me/77012335888"),
            url_label: Some("WhatsApp-бот →"),
            summary: "Интеллектуальный бот поддержки для студентов, преподавателей и гостей университета.",
            extra: None,
            list_heading: "Возможности:",
            items: &[
                "ответы на вопросы об университете 24/7",
                "AI-обработка запросов",
                "разгрузка колл-центра и администрации",
                "единый канал коммуникации",
            ],
            client: Some("Клиент: Kunaev University"),
            footnote: None,
        },
        Project {
            emoji: "🌱",
            title: "Платформа благотворительных пожертвований — Mukhatay Ormany",
            url: Some("https://mukhatayormany.kz/"),
            url_label: Some("https://mukhatayormany.kz/"),
            summary: "Онлайн-платформа для пожертвований на посадку деревьев с удобной административной панелью.",
            extra: None,
            list_heading: "Реализовано:",
            items: &[
                "управление контентом сайта",
                "защищённая платёжная интеграция с Ioko",
                "прозрачный и удобный пользовательский путь",
                "админ-панель для управления проектом",
            ],
            client: None,
            footnote: None,
        },
        Project {
            emoji: "📸",
            title: "RSS / AI-бот для Instagram → сайт",
            url: None,
            url_label: None,
            summary: "Автоматизация новостей университета",
            extra: None,
            list_heading: "Система автоматически:",
            items: &[
                "получает новые посты из Instagram",
                "публикует их в разделе «Новости» сайта",
                "улучшает текст с помощью ИИ",
                "переводит контент на RU / KZ / EN",
                "прикрепляет медиафайлы",
            ],
            client: None,
            footnote: Some("Идеально для образовательных и медиа-платформ."),
        },
        Project {
            emoji: "🏛",
            title: "Цифровая платформа обращений граждан",
            url: None,
            url_label: None,
            summary: "Для депутатов Жетысуской области",
            extra: Some("Инновационная платформа, соединяющая граждан и закреплённых за ними депутатов."),
            list_heading: "Ключевые возможности:",
            items: &[
                "управление обращениями граждан",
                "AI-категоризация и приоритизация",
                "обмен сообщениями в реальном времени",
                "аналитические дашборды и отчёты",
            ],
            client: Some("Клиент: Депутаты Жетысуского региона"),
            footnote: None,
        },
        Project {
            emoji: "🤖",
            title: "AI-бот для генерации контента (Telegram)",
            url: None,
            url_label: None,
            summary: "Контент-ассистент с ИИ",
            extra: Some("Telegram-бот для генерации текстов и идей с использованием Gemini API и ChatGPT API."),
            list_heading: "Подходит для маркетинга, SMM и контент-команд:",
            items: &[
                "посты для соцсетей",
                "описания товаров",
                "статьи и рекламные тексты",
            ],
            client: None,
            footnote: None,
        },
    ],
    privacy: LegalPage {
        title: "Политика конфиденциальности",
        intro: "Настоящая Политика конфиденциальности описывает, как birqadam.kz собирает, использует и защищает вашу информацию.",
        sections: [
            LegalSection {
                heading: "1. Сбор информации",
                body: "Мы собираем информацию, которую вы предоставляете напрямую нам через формы на сайте, включая ваше имя и номер телефона.",
            },
            LegalSection {
                heading: "2. Использование информации",
                body: "Мы используем вашу информацию исключительно для: связи с вами по вашему запросу; предоставления информации о наших услугах; улучшения работы нашего сайта.",
            },
            LegalSection {
                heading: "3. Защита данных",
                body: "Мы принимаем технические и организационные меры для защиты ваших персональных данных от несанкционированного доступа, изменения или удаления.",
            },
            LegalSection {
                heading: "4. Передача третьим лицам",
                body: "Мы не продаем и не передаем ваши персональные данные третьим лицам, за исключением случаев, предусмотренных законодательством Республики Казахстан.",
            },
            LegalSection {
                heading: "5. Ваши права",
                body: "Вы имеете право запросить доступ к вашим данным или их удаление, связавшись с нами по указанным контактам.",
            },
        ],
    },
    terms: LegalPage {
        title: "Пользовательское соглашение",
        intro: "Используя сайт birqadam.kz, вы соглашаетесь с условиями настоящего Соглашения.",
        sections: [
            LegalSection {
                heading: "1. Общие положения",
                body: "Сайт предоставляет информацию об услугах ИП Calipso в области автоматизации и ИИ-решений.",
            },
            LegalSection {
                heading: "2. Использование сайта",
                body: "Вы обязуетесь использовать сайт только в законных целях и не предпринимать действий, которые могут нарушить его работу.",
            },
            LegalSection {
                heading: "3. Интеллектуальная собственность",
                body: "Весь контент на сайте является собственностью birqadam.kz или используется с разрешения правообладателей.",
            },
            LegalSection {
                heading: "4. Ограничение ответственности",
                body: "Мы прилагаем все усилия для обеспечения точности информации, но не гарантируем отсутствие ошибок. Мы не несем ответственности за любые прямые или косвенные убытки, возникшие в результате использования сайта.",
            },
            LegalSection {
                heading: "5. Изменения условий",
                body: "Мы оставляем за собой право изменять условия настоящего соглашения в любое время. Изменения вступают в силу с момента их публикации на сайте.",
            },
        ],
    },
};

static KK: Content = Content {
    nav: NavLabels {
        services: "Қызметтер",
        about: "Біз туралы",
        projects: "Жобалар",
        cases: "Кейстер",
        how: "Қалай жұмыс істейміз",
        pricing: "Баға",
        faq: "FAQ",
        contact: "Байланыс",
    },
    brand_tag: "AI арқылы автоматтандыру және әзірлеу",
    hero_heading: "Қайталанатын жұмысты тоқтатыңыз. Мұның бәрін AI істесін.",
    hero_sub: "Біз ақылды жүйелер құрамыз: процестерді автоматтандырады, күшті сайттар жасайды және клиенттерді тәулік бойы қолдайды. Командаңыз өссін, қалғанын AI атқарады.",
    cta_primary: "Тегін аудит",
    cta_secondary: "Демо көру",
    metrics: [
        "50+ автоматтандыру жобасы",
        "70% шығынды қысқарту",
        "Іске қосу — 2 апта",
    ],
    tiles: [
        Tile {
            icon: Icon::FileText,
            title: "AI → бизнес",
            text: "Құжаттар, чат‑боттар, есептер, интеграциялар.",
        },
        Tile {
            icon: Icon::Bot,
            title: "Чат‑боттар KZ/RU",
            text: "24/7 қолдау және сату.",
        },
        Tile {
            icon: Icon::BarChart,
            title: "Дашбордтар",
            text: "Нақты уақыт метрикалары.",
        },
        Tile {
            icon: Icon::Workflow,
            title: "Автобарыстар",
            text: "100+ интеграция мен келісім.",
        },
    ],
    security_note: "Банк деңгейіндегі шифрлау • ҚР ДЦ‑да хостинг",
    services_eyebrow: "Қазіргі бизнеске арналған толық AI шешімдері",
    services_title: "Чат‑боттан күрделі платформаларға дейін — сіз ұйықтағанда да жұмыс істейді",
    services: [
        Service {
            icon: Icon::FileText,
            title: "Қолмен дерек енгізуді біржола ұмытамыз",
            desc: "AI мыңдаған құжатты 99%+ дәлдікпен оқып, өңдейді. PDF, скан, Excel және суреттермен жұмыс істейді.",
            bullets: [
                "Шот-фактурадан деректерді алу және тексеру",
                "Шарттарды талдау және негізгі тармақтарды табу",
                "Кез келген форматтағы формаларды өңдеу",
                "1C, Google Sheets және БД интеграциялары",
                "Сіздің бизнесіңізге бейімделген өрістер",
            ],
            perfect_for: "Бухгалтерия, банктер, логистика, мемлекеттік мердігерлер",
        },
        Service {
            icon: Icon::Bot,
            title: "Клиенттерге 24/7 KZ/RU жауап беріңіз",
            desc: "AI‑көмекші бизнесіңізді біледі және тәулік бойы өтінімдерді жабады. Қолдау шығынын 70% қысқартып, жауап беруді жеделдетіңіз.",
            bullets: [
                "Табиғи диалогтар (KZ, RU, EN)",
                "WhatsApp, Telegram, Instagram, сайт",
                "Құжаттарыңыз бойынша оқыту",
                "Тапсырыстар, брондау, ЖҚС",
                "Операторға беру + аналитика",
            ],
            perfect_for: "E‑commerce, қызметтер, мейрамханалар, қонақ үйлер, білім",
        },
        Service {
            icon: Icon::BarChart,
            title: "Деректерді автоматты түрде шешімге айналдырыңыз",
            desc: "Қолмен есеп жасауды тоқтатыңыз. Трендтер мен болжамдары бар дашбордтар және жоспарлы есептер.",
            bullets: [
                "Күнделікті/апталық/айлық есептер",
                "Нақты уақыттағы метрикалар",
                "Болжамды аналитика",
                "Табиғи тілдегі сұраныстар",
                "Excel/Sheets/БД + ескертулер",
            ],
            perfect_for: "Ритейл, өндіріс, қаржы, агенттіктер",
        },
        Service {
            icon: Icon::Workflow,
            title: "Құралдарыңызды байланыстырып, рутинаны алыңыз",
            desc: "AI‑воркфлоулар деректерді жылжытады, хат жібереді және жүйелерді жаңартады — қателіксіз.",
            bullets: [
                "Авто хаттар және фоллоу‑аптар",
                "Платформалар арасында дерек синхроны",
                "Келісімдер және хабарламалар",
                "Тапсырма беру және трекинг",
                "100+ бизнес интеграция",
            ],
            perfect_for: "Қайталанатын цифрлық процестері бар кез келген бизнес",
        },
        Service {
            icon: Icon::Brain,
            title: "Лидтерді бағалау және автосату",
            desc: "AI лидтерді бағалайды, жеке тізбектерді жібереді және клиент дайын болғанда ескертеді.",
            bullets: [
                "Көп көзден лид жинау",
                "AI‑скоринг және басымдық",
                "Жекеленген хат/хабарлама тізбектері",
                "Кездесуді авто жоспарлау",
                "CRM интеграциялары және аналитика",
            ],
            perfect_for: "B2B, жылжымайтын мүлік, SaaS, консалтинг",
        },
        Service {
            icon: Icon::Users,
            title: "HR және рекрутинг автоматтандыруы",
            desc: "Резюмелерді скринингтеу, сұхбат уақытын қою және онбординг арқылы жалдау уақытын 60% қысқартыңыз.",
            bullets: [
                "Кандидаттарды скрининг және ранжирлеу",
                "Сұхбатты авто жоспарлау",
                "Кандидатпен коммуникациялар",
                "Онбординг және тапсырмалар",
                "Қызметкер деректері және өнімділік",
            ],
            perfect_for: "Өсіп жатқан компаниялар, агенттіктер, HR бөлімдер",
        },
    ],
    cases_eyebrow: "Нәтижелер дәлелденген",
    cases_title: "Кейстер және табыс тарихтары",
    cases: [
        CaseStudy {
            badge: "E-commerce — Косметика Yoko-Sun",
            headline: "Алғашқы 3 айда сату 180% артты",
            bullets: &[
                "Каталог, себеті бар толық дүкен",
                "Ыңғайлы интерфейс",
                "Kaspi.kz және төлем жүйелерімен интеграция",
                "SEO-оптимизация және жүктеу жылдамдығы",
            ],
            quote: "Кәсіби интернет-дүкен ыңғайлы әкімші панельмен жасалды. Іске қосудан кейінгі алғашқы 3 айда сату 180% өсті.",
            who: "Yoko-Sun иесі",
        },
        CaseStudy {
            badge: "AI-боттар — WhatsApp/Telegram автоматтандыру",
            headline: "85% сұрауларды адам қатыспай AI өңдейді",
            bullets: &[
                "KZ/RU брондау, тапсырыс, ЖҚС",
                "CRM және Google Sheets интеграциясы",
                "2-3 айда өтеледі",
                "Қолдау қызметкерлерінен үнемдеу",
            ],
            quote: "Бот күніне 500 хабарламаны өңдейді. Біз екі қолдау қызметкерінен үнемдедік және жауап беру уақытын 5 секундқа дейін қысқарттық.",
            who: "«Достархан» мейрамханасы, Алматы",
        },
        CaseStudy {
            badge: "1C интеграциясы — Есеп айырысу автоматтандыруы",
            headline: "Құжаттарды AI өңдеу + 1C интеграциясы",
            bullets: &[
                "1C:Бухгалтерияға деректерді секундтар ішінде жүктеу",
                "GPT-4 Vision 99,5% дәлдікпен танылады",
                "Құжат айналымын толығымен автоматтандыру",
                "Excel, CSV файлдарынан автоматты жүктеу",
                "Веб және мобильді нақты уақыттағы есептер",
                "QR арқылы электронды қолтаңба үшін eGov интеграциясы",
                "Қолмен енгізудің орнына скрипттерді автоматтандыру",
            ],
            quote: "Бұрын 100 есеп-шотты өңдеу бүкіл күнді алатын. Енді 30 минут. Бухгалтер деректерді емес, талдауды орындайды.",
            who: "Қаржы директоры, «Логистика+» ЖШС",
        },
        CaseStudy {
            badge: "Веб-әзірлеу — Лендингтер мен сайттар",
            headline: "12-18% түрлендіру (2-3 есе орташа көрсеткіштен жоғары)",
            bullets: &[
                "KZ/RU қазақша AI-контент генерациясы",
                "Қазіргі заманғы дизайн мен мобильді бейімдеу",
                "WhatsApp пен Telegram формаларымен интеграция",
                "48 сағатта жасау",
            ],
            quote: "2 күн ішінде Kaspi Pay интеграциясы бар дайын лендинг алдық. Лидтер бірінші күні ғана келді. Шығындар аптасына өтелді.",
            who: "EdTech стартапы, Астана",
        },
        CaseStudy {
            badge: "HoReCa — Mейрамхана QR-мәзірі",
            headline: "Орташа чекті 35% арттыру",
            bullets: &[
                "QR сканерлеу → мәзірді қарау → онлайн тапсырыс",
                "KZ/RU/EN тілдеріндегі фотолы тағамдар",
                "Әкімші панель арқылы оңай жаңарту",
                "Интерактивті цифрлық мәзірлер",
            ],
            quote: "Тұтынушылар QR-мәзірді ұнатады! Олар фото, құрамын, калориясын көреді. Күйішілер жылдамырақ жұмыс істейді, ал тапсырыстар көбейді.",
            who: "«Тау» дәмханасы, 5 нүктелі желі",
        },
        CaseStudy {
            badge: "Аналитика — Kaspi.kz Dashboard",
            headline: "Динамикалық баға қою арқылы пайда 40% артты",
            bullets: &[
                "Қарсылас бағаларын нақты уақытта бақылау",
                "Сұранысты және оңтайлы бағаларды AI арқылы болжау",
                "Сату мен қалдықтар бойынша автоматты есептер",
                "Интеллектуалды аналитика",
            ],
            quote: "Платформа қарсылас бағаларын өзгерткенін көрсетеді. Біз бірден әрекет етеміз және әрқашан топта қаламыз. Пайда 40% өсті.",
            who: "Электроника сатушысы, Kaspi Top-50",
        },
        CaseStudy {
            badge: "AI Контент — Мәтін/кескін генерациясы",
            headline: "Контент-менеджерден айына ₸500К үнемдеу",
            bullets: &[
                "Әлеуметтік желілерге 10 минут ішінде 100 жазба",
                "Тауар сипаттамалары, мақалалар, жарнама мәтіндері",
                "DALL-E/Midjourney арқылы брендіңізге сәйкес AI-кескіндер",
                "Автоматты жариялау",
            ],
            quote: "Бұрын көшірмеші мен дизайнер жалдайтын. Енді AI контентті минуттар ішінде жасайды. Сапасы тамаша, ал құны 10 есе аз.",
            who: "«Brand Up» маркетинг агенттігі",
        },
    ],
    how_eyebrow: "Идеядан іске қосуға дейін 2–4 апта",
    how_title: "Қалай жұмыс істейміз",
    how: [
        ProcessStep {
            step: 1,
            title: "Тегін аудит (1‑апта)",
            text: "Процестерді, тар орындарды және ROI есептейміз. Автоматтандыру картасы.",
        },
        ProcessStep {
            step: 2,
            title: "Шешім дизайны (2‑апта)",
            text: "Жұмыс ағындары, дерек көздері, интеграциялар. Даму алдында мақұлдайсыз.",
        },
        ProcessStep {
            step: 3,
            title: "Даму және интеграция (3–4 апта)",
            text: "Құрастырамыз, қосамыз және AI‑ды деректеріңізде оқытамыз.",
        },
        ProcessStep {
            step: 4,
            title: "Іске қосу және оңтайландыру",
            text: "Енгіземіз, командаңызды оқытамыз, ай сайын ROI туралы есеп.",
        },
    ],
    pricing_eyebrow: "Пакеттер және жеке смета",
    pricing_title: "Мөлдір баға және өсуге сай",
    pricing: [
        Plan {
            name: "Starter",
            price: "₸150,000",
            popular: false,
            cta: "14 күн тегін",
            best_for: "Мейрамхана, салон, шағын ритейл, қызметтер",
            features: &[
                "1 автоматтандыру шешімі",
                "Негізгі AI чатбот",
                "Email қолдау (≤24сағ)",
                "Ай сайынғы есептер",
                "Айына 1 000 транзакцияға дейін",
            ],
        },
        Plan {
            name: "Business",
            price: "₸450,000",
            popular: true,
            cta: "Business‑ке өту",
            best_for: "E‑commerce, қызметтер, өндіріс, агенттіктер",
            features: &[
                "5‑ке дейін шешім",
                "Дамыған чатбот (кастом оқыту)",
                "Приоритет қолдау (≤4сағ)",
                "Кастом интеграциялар",
                "Апталық аналитика",
                "Айына 10 000 транзакция",
                "API + аккаунт‑менеджер",
            ],
        },
        Plan {
            name: "Enterprise",
            price: "Custom",
            popular: false,
            cta: "Смета сұрау",
            best_for: "Банктер, телеком, мемлекеттік, ірі ритейл",
            features: &[
                "Шексіз шешімдер",
                "Enterprise AI және on‑prem",
                "24/7 команда",
                "SLA 99,9%",
                "Қауіпсіздік аудиттері",
                "Шексіз транзакциялар",
                "White‑label",
            ],
        },
    ],
    addons_title: "Қосымша шешімдер",
    addons: [
        Addon {
            title: "48 сағатта сайт",
            text: "AI‑контент (KZ/RU), адаптив, SEO, домен, WhatsApp/Telegram/Kaspi.",
            price: "₸50,000 – ₸200,000",
            cta: "Сайтқа тапсырыс",
        },
        Addon {
            title: "Дерек көшіру",
            text: "Excel/PDF/қағаз/БД деректерін шығарып, тазалап, көшіреміз. QA + оқыту.",
            price: "₸80,000 – ₸300,000",
            cta: "Деректі көшіру",
        },
        Addon {
            title: "Кастом модель оқыту",
            text: "Салалық деректеріңізде оқыту — дәлдік пен релеванттық.",
            price: "₸200,000‑ден",
            cta: "Модельді оқыту",
        },
    ],
    tech_eyebrow: "Enterprise деңгейі",
    tech_title: "Технология және жергілікті интеграциялар",
    tools_title: "Ғаламдық құралдар",
    local_title: "Жергілікті интеграциялар",
    tools: [
        "GPT‑4 және Claude (NLP)",
        "LangChain",
        "Құжаттарға CV",
        "Кастом ML",
        "Қорғау және шифрлау",
        "ҚР деректер орталығы",
    ],
    local: [
        "Kaspi.kz төлемдері",
        "1C бухгалтерия",
        "Halyk Bank API",
        "2GIS",
        "WhatsApp Business API",
        "Telegram Bot API",
    ],
    faq_title: "FAQ",
    faq: [
        FaqEntry {
            question: "Енгізу қанша уақыт?",
            answer: "Әдетте 2–4 апта; қарапайым чатбот — 1 аптаға дейін; күрделі интеграциялар — 4–6 апта.",
        },
        FaqEntry {
            question: "Қазақша/орысша қолдайсыз ба?",
            answer: "Иә, KZ және RU (және EN) — жергілікті контекстпен. Қосымша тілдер мүмкін.",
        },
        FaqEntry {
            question: "Біздің жүйелермен интеграция?",
            answer: "Иә: 1C, Bitrix24, Kaspi, Google Workspace және проприетарлық жүйелер.",
        },
        FaqEntry {
            question: "AI қателессе?",
            answer: "Human‑in‑the‑loop, сенімділік шектері, толық аудит.",
        },
        FaqEntry {
            question: "Деректер қауіпсіз бе?",
            answer: "Банк деңгейіндегі шифрлау, ҚР заңдарына сай, on‑prem опциясы, NDA/DPA.",
        },
        FaqEntry {
            question: "Қызметкерлерді оқытасыз ба?",
            answer: "Иә, барлық жоспарға оқыту және құжаттама кіреді.",
        },
        FaqEntry {
            question: "ROI қашан?",
            answer: "Көбіне 3–6 ай; құжаттар мен қолдау тезірек өтеледі.",
        },
        FaqEntry {
            question: "Кішіден бастауға бола ма?",
            answer: "Әрине. Бір шешімнен бастап, кеңейтіңіз.",
        },
    ],
    final_cta: FinalCta {
        heading: "Бизнесіңізді автоматтандыруға дайынсыз ба?",
        sub: "Тегін аудитке жазылыңыз — нақты уақыт пен шығын үнемін есептейміз.",
        primary: "Тегін аудит",
        ghost: "Мысалдарды көру",
        chips: ["Карта қажет емес", "14 күн тегін", "Қайтарым кепілдігі"],
    },
    footer_tag: "Қазақстандағы AI автоматтандыру және әзірлеу",
    footer_links: [
        "Қызметтер",
        "Жобалар",
        "Қалай жұмыс істейміз",
        "Баға",
        "Технологиялар",
        "Қос. шешімдер",
        "FAQ",
    ],
    misc: Misc {
        close: "Жабу",
        back_home: "Басты бетке",
        have_questions: "Сұрақ бар ма? Telegram‑ға жазыңыз",
        open_chat: "Чатты ашу",
    },
    about: About {
        title: "Компания туралы",
        legal_heading: "Қысқаша заңды ақпарат",
        legal_body: "«Calipso» ЖК. Орналасқан жері: Қазақстан Республикасы, Алматы қ.",
        intro: [
            "birqadam.kz — бизнес-процестерді автоматтандыруға және жасанды интеллект негізіндегі зияткерлік цифрлық шешімдерді әзірлеуге маманданған технологиялық компания.",
            "Біз компанияларға рутиналық операциялардан бас тартуға, тиімділікті арттыруға және шығындарды қысқартуға көмектесеміз: чат-боттар мен құжат өңдеуден бастап аналитикалық дашбордтарға, интеграцияларға және күрделі AI-платформаларға дейін. Командаңыз бизнесті дамытумен айналысқанда, технологиялар 24/7 жұмыс істейді.",
        ],
        what_heading: "Немен айналысамыз",
        what_items: [
            "құжат айналымы мен деректерді өңдеуді автоматтандыру;",
            "қолдау және сату үшін AI чат-боттар (KZ / RU);",
            "сайттар мен веб-платформаларды әзірлеу;",
            "нақты уақыттағы аналитика және дашбордтар;",
            "кастом AI-воркфлоулар және бизнес-жүйелермен интеграциялар (1C, CRM, дерекқорлар, мессенджерлер, төлем сервистері).",
        ],
        approach_heading: "Біздің тәсіл",
        approach_body: "Біз клиентті барлық кезеңде сүйемелдейміз: процестерді талдау мен шешімді жобалаудан бастап енгізуге, команданы оқытуға және одан әрі оңтайландыруға дейін. Барлық шешімдер бизнестің нақты міндеттеріне бейімделіп, өсуіне қарай масштабталады.",
        security_heading: "Сенімділік және қауіпсіздік",
        security_body: "Біз деректерді қорғаудың заманауи әдістерін, корпоративтік стандарттар деңгейіндегі шифрлауды қолданамыз және Қазақстан Республикасы аумағындағы дата-орталықтарда хостинг пайдаланамыз.",
        audience_heading: "Кім үшін жұмыс істейміз",
        audience_body: "Біздің шешімдер шағын, орта және ірі бизнеске жарайды: e-commerce, HoReCa, қаржы, логистика, білім беру, B2B-сервистер және корпоративтік жобалар.",
        closing: "birqadam.kz — Қазақстандағы AI автоматтандыру және әзірлеу.",
        closing_sub: "Идеядан іске қосуға дейін — 2–4 апта.",
    },
    projects_title: "Жүзеге асырылған жобалар",
    projects: [
        Project {
            emoji: "🛒",
            title: "E-commerce платформасы — Yoko-Sun",
            url: Some("https://yoko-sun.kz"),
            url_label: Some("https://yoko-sun.kz"),
            summary: "Каталогы, себеті бар және жүктелу жылдамдығы жоғары толыққанды интернет-дүкен. Жоба конверсияны арттыруға және контентті басқару ыңғайлылығына бағытталған.",
            extra: None,
            list_heading: "Не жасалды:",
            items: &[
                "заманауи адаптивті интерфейс",
                "SEO-оптимизация",
                "төлем сервистерімен интеграциялар",
                "ыңғайлы әкімшілік панель",
            ],
            client: None,
            footnote: None,
        },
        Project {
            emoji: "📚",
            title: "Мақалалар қабылдайтын онлайн-журнал — Kunaev University",
            url: Some("https://bulletin-law.vuzkunaeva.kz/"),
            url_label: Some("https://bulletin-law.vuzkunaeva.kz/"),
            summary: "Мақалаларды онлайн қабылдайтын және редакциялық процесті толық автоматтандыратын ғылыми журналға арналған цифрлық платформа.",
            extra: None,
            list_heading: "Функционалдығы:",
            items: &[
                "мақалаларды онлайн қабылдау",
                "модерация және рецензиялау",
                "журнал шығарылымдарын басқару",
                "материалдарды электронды басылымдарда жариялау",
            ],
            client: Some("Клиент: Kunaev University"),
            footnote: None,
        },
        Project {
            emoji: "💬",
            title: "Университетке арналған AI WhatsApp-боты",
            url: Some("https://wa.me/77012335888"),
            url_label: Some("WhatsApp-бот →"),
            summary: "Студенттерге, оқытушыларға және университет қонақтарына арналған зияткерлік қолдау боты.",
            extra: None,
            list_heading: "Мүмкіндіктері:",
            items: &[
                "университет туралы сұрақтарға 24/7 жауаптар",
                "сұрауларды AI өңдеу",
                "колл-орталық пен әкімшіліктің жүктемесін азайту",
                "бірыңғай коммуникация арнасы",
            ],
            client: Some("Клиент: Kunaev University"),
            footnote: None,
        },
        Project {
            emoji: "🌱",
            title: "Қайырымдылық жарналары платформасы — Mukhatay Ormany",
            url: Some("https://mukhatayormany.kz/"),
            url_label: Some("https://mukhatayormany.kz/"),
            summary: "Ағаш отырғызуға жарна жинауға арналған, ыңғайлы әкімшілік панелі бар онлайн-платформа.",
            extra: None,
            list_heading: "Жасалды:",
            items: &[
                "сайт контентін басқару",
                "Ioko-мен қорғалған төлем интеграциясы",
                "ашық әрі ыңғайлы пайдаланушы жолы",
                "жобаны басқаруға арналған әкімші панель",
            ],
            client: None,
            footnote: None,
        },
        Project {
            emoji: "📸",
            title: "Instagram → сайт RSS / AI-боты",
            url: None,
            url_label: None,
            summary: "Университет жаңалықтарын автоматтандыру",
            extra: None,
            list_heading: "Жүйе автоматты түрде:",
            items: &[
                "Instagram-нан жаңа жазбаларды алады",
                "оларды сайттың «Жаңалықтар» бөлімінде жариялайды",
                "мәтінді AI көмегімен жақсартады",
                "контентті RU / KZ / EN тілдеріне аударады",
                "медиафайлдарды тіркейді",
            ],
            client: None,
            footnote: Some("Білім беру және медиа платформаларға өте қолайлы."),
        },
        Project {
            emoji: "🏛",
            title: "Азаматтар өтініштерінің цифрлық платформасы",
            url: None,
            url_label: None,
            summary: "Жетісу облысының депутаттарына арналған",
            extra: Some("Азаматтар мен оларға бекітілген депутаттарды байланыстыратын инновациялық платформа."),
            list_heading: "Негізгі мүмкіндіктері:",
            items: &[
                "азаматтардың өтініштерін басқару",
                "AI-санаттау және басымдық беру",
                "нақты уақытта хабарлама алмасу",
                "аналитикалық дашбордтар мен есептер",
            ],
            client: Some("Клиент: Жетісу өңірінің депутаттары"),
            footnote: None,
        },
        Project {
            emoji: "🤖",
            title: "Контент генерациялайтын AI-бот (Telegram)",
            url: None,
            url_label: None,
            summary: "AI контент-ассистенті",
            extra: Some("Gemini API және ChatGPT API қолданып мәтіндер мен идеялар генерациялайтын Telegram-бот."),
            list_heading: "Маркетинг, SMM және контент-командаларға қолайлы:",
            items: &[
                "әлеуметтік желілерге жазбалар",
                "тауар сипаттамалары",
                "мақалалар мен жарнама мәтіндері",
            ],
            client: None,
            footnote: None,
        },
    ],
    privacy: LegalPage {
        title: "Құпиялылық саясаты",
        intro: "Бұл Құпиялылық саясаты birqadam.kz сіздің ақпаратыңызды қалай жинайтынын, пайдаланатынын және қорғайтынын сипаттайды.",
        sections: [
            LegalSection {
                heading: "1. Ақпаратты жинау",
                body: "Біз сіз сайттағы формалар арқылы тікелей беретін ақпаратты, соның ішінде атыңыз бен телефон нөміріңізді жинаймыз.",
            },
            LegalSection {
                heading: "2. Ақпаратты пайдалану",
                body: "Біз сіздің ақпаратыңызды тек мына мақсаттарда пайдаланамыз: сіздің сұранысыңыз бойынша сізбен байланысу; біздің қызметтеріміз туралы ақпарат беру; сайтымыздың жұмысын жақсарту.",
            },
            LegalSection {
                heading: "3. Деректерді қорғау",
                body: "Біз сіздің жеке деректеріңізді рұқсатсыз кіруден, өзгертуден немесе жоюдан қорғау үшін техникалық және ұйымдастырушылық шараларды қолданамыз.",
            },
            LegalSection {
                heading: "4. Үшінші тұлғаларға беру",
                body: "Біз сіздің жеке деректеріңізді үшінші тұлғаларға сатпаймыз және бермейміз, Қазақстан Республикасының заңнамасында көзделген жағдайларды қоспағанда.",
            },
            LegalSection {
                heading: "5. Сіздің құқықтарыңыз",
                body: "Сіз көрсетілген контактілер арқылы бізге хабарласып, деректеріңізге кіруді немесе оларды жоюды талап етуге құқылысыз.",
            },
        ],
    },
    terms: LegalPage {
        title: "Пайдаланушы келісімі",
        intro: "birqadam.kz сайтын пайдалану арқылы сіз осы Келісімнің шарттарымен келісесіз.",
        sections: [
            LegalSection {
                heading: "1. Жалпы ережелер",
                body: "Сайт «ИП Calipso» автоматтандыру және AI шешімдері саласындағы қызметтері туралы ақпарат береді.",
            },
            LegalSection {
                heading: "2. Сайтты пайдалану",
                body: "Сіз сайтты тек заңды мақсаттарда пайдалануға және оның жұмысын бұзуы мүмкін әрекеттерді жасамауға міндеттенесіз.",
            },
            LegalSection {
                heading: "3. Зияткерлік меншік",
                body: "Сайттағы барлық мазмұн birqadam.kz меншігі болып табылады немесе құқық иелерінің рұқсатымен пайдаланылады.",
            },
            LegalSection {
                heading: "4. Жауапкершілікті шектеу",
                body: "Біз ақпараттың дәлдігін қамтамасыз ету үшін бар күшімізді саламыз, бірақ қателердің болмауына кепілдік бермейміз. Біз сайтты пайдалану нәтижесінде туындаған кез келген тікелей немесе жанама шығындар үшін жауап бермейміз.",
            },
            LegalSection {
                heading: "5. Шарттарды өзгерту",
                body: "Біз осы келісімнің шарттарын кез келген уақытта өзгертуге құқылымыз. Өзгерістер сайтта жарияланған сәттен бастап күшіне енеді.",
            },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_and_default_is_russian() {
        assert_eq!(DEFAULT_LANG, Lang::Ru);
        let ru = Content::get(Lang::Ru);
        let kk = Content::get(Lang::Kk);
        assert_eq!(
            ru.hero_heading,
            "Перестаньте делать рутину. Пусть ИИ делает это за вас."
        );
        assert_ne!(ru.hero_heading, kk.hero_heading);
    }

    #[test]
    fn toggle_twice_returns_to_start() {
        for lang in [Lang::Ru, Lang::Kk] {
            assert_ne!(lang.toggle(), lang);
            assert_eq!(lang.toggle().toggle(), lang);
            assert_eq!(
                Content::get(lang.toggle().toggle()).hero_heading,
                Content::get(lang).hero_heading
            );
        }
    }

    #[test]
    fn locale_trees_stay_in_sync() {
        validate().expect("locale content out of sync");
    }

    #[test]
    fn pricing_has_three_tiers_with_one_popular() {
        for lang in [Lang::Ru, Lang::Kk] {
            let plans = &Content::get(lang).pricing;
            assert_eq!(plans.len(), 3);
            assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
            // Catalog order is meaningful: the middle tier carries the flag.
            assert!(plans[1].popular);
        }
    }

    #[test]
    fn faq_has_eight_entries_in_both_locales() {
        assert_eq!(Content::get(Lang::Ru).faq.len(), 8);
        assert_eq!(Content::get(Lang::Kk).faq.len(), 8);
    }

    #[test]
    fn paired_lists_have_equal_lengths() {
        let ru = Content::get(Lang::Ru);
        let kk = Content::get(Lang::Kk);
        for (a, b) in ru.cases.iter().zip(kk.cases.iter()) {
            assert_eq!(a.bullets.len(), b.bullets.len());
        }
        for (a, b) in ru.projects.iter().zip(kk.projects.iter()) {
            assert_eq!(a.items.len(), b.items.len());
        }
        for (a, b) in ru.pricing.iter().zip(kk.pricing.iter()) {
            assert_eq!(a.features.len(), b.features.len());
        }
    }

    #[test]
    fn switch_label_points_at_the_other_locale() {
        assert_eq!(Lang::Ru.switch_label(), "KZ");
        assert_eq!(Lang::Kk.switch_label(), "RU");
    }
}
