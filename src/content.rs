//! Static site content and document layout
//!
//! The page is a fixed column of rows (the "document") scrolled under the
//! header. Everything that needs row positions — active-section tracking,
//! smooth-scroll targets, reveal triggers, focusable in-page links — reads
//! them from the one `Document` built here, so logic and rendering cannot
//! drift apart.

use std::sync::OnceLock;

/// Contact details shown in the contact section
pub const SITE_EMAIL: &str = "info@nakhla.sa";
pub const SITE_PHONE: &str = "+966 11 234 5678";
pub const SITE_ADDRESS: &str = "طريق الملك فهد، الرياض، المملكة العربية السعودية";

/// Global notification texts
pub const FORM_ERROR_NOTICE: &str = "يرجى تصحيح الأخطاء في النموذج";
pub const FORM_SUCCESS_NOTICE: &str = "شكراً لك على رسالتك! سنتواصل معك قريباً.";
pub const SEND_FAILURE_NOTICE: &str = "تعذر إرسال الرسالة. حاول مرة أخرى.";
pub const BLOG_TEASER_NOTICE: &str = "ميزة المدونة قريباً! ترقب التحديثات.";

/// Accessibility labels
pub const SKIP_LINK_LABEL: &str = "انتقل إلى المحتوى الرئيسي";
pub const NAV_OPEN_LABEL: &str = "فتح القائمة";
pub const NAV_CLOSE_LABEL: &str = "إغلاق القائمة";

/// Page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Products,
    Services,
    Portfolio,
    Blog,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Blog,
        SectionId::Contact,
    ];

    /// Resolve a config value like "contact" or "اتصل بنا" to a section
    pub fn from_name(name: &str) -> Option<SectionId> {
        let needle = name.trim().to_lowercase();
        SectionId::ALL.into_iter().find(|id| {
            id.slug() == needle || id.nav_label() == needle
        })
    }

    /// Stable ASCII id, used in configuration
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "الرئيسية",
            SectionId::About => "من نحن",
            SectionId::Products => "منتجاتنا",
            SectionId::Services => "خدماتنا",
            SectionId::Portfolio => "أعمالنا",
            SectionId::Blog => "المدونة",
            SectionId::Contact => "اتصل بنا",
        }
    }
}

/// What activating an in-page link does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Smooth-scroll to a section anchor
    Jump(SectionId),
    /// Open the contact form view
    OpenContactForm,
    /// Blog posts have no destination yet
    BlogTeaser,
    /// Copy the site email to the clipboard
    CopyEmail,
}

/// A focusable in-page link (hero call-to-action, blog link, contact action)
#[derive(Debug, Clone, Copy)]
pub struct PageLink {
    pub label: &'static str,
    pub action: LinkAction,
}

/// One rendered document row
#[derive(Debug, Clone, Copy)]
pub enum DocLine {
    Blank,
    /// Section heading row
    SectionTitle(SectionId),
    /// Decorative rule under a section heading
    Rule,
    /// Plain copy
    Text(&'static str),
    /// First row of a card; `card` is the global card index used for reveals
    CardTitle { card: usize, text: &'static str },
    CardBody { card: usize, text: &'static str },
    /// Focusable link row; index into `Document::links`
    Link(usize),
    /// Contact detail row
    ContactInfo(&'static str),
}

/// The laid-out page
pub struct Document {
    pub lines: Vec<DocLine>,
    pub links: Vec<PageLink>,
    /// Document row of each link, indexed like `links`
    pub link_rows: Vec<u16>,
    /// Document row of each card's first line, by global card index
    pub card_rows: Vec<u16>,
    /// (section, top row, row count) in document order
    section_bounds: Vec<(SectionId, u16, u16)>,
}

impl Document {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn card_count(&self) -> usize {
        self.card_rows.len()
    }

    /// Top row of a section's heading
    pub fn section_top(&self, id: SectionId) -> u16 {
        self.section_bounds
            .iter()
            .find(|(s, _, _)| *s == id)
            .map(|(_, top, _)| *top)
            .unwrap_or(0)
    }

    /// Row count of a section
    #[allow(dead_code)]
    pub fn section_rows(&self, id: SectionId) -> u16 {
        self.section_bounds
            .iter()
            .find(|(s, _, _)| *s == id)
            .map(|(_, _, height)| *height)
            .unwrap_or(0)
    }

    /// Section whose row range contains the given document row
    pub fn section_at(&self, row: u16) -> SectionId {
        for (id, top, height) in &self.section_bounds {
            if row >= *top && row < top + height {
                return *id;
            }
        }
        // Past the last section bottom: stick to the last section
        self.section_bounds
            .last()
            .map(|(id, _, _)| *id)
            .unwrap_or_default()
    }
}

/// The singleton laid-out page
pub fn document() -> &'static Document {
    static DOCUMENT: OnceLock<Document> = OnceLock::new();
    DOCUMENT.get_or_init(build_document)
}

struct DocumentBuilder {
    lines: Vec<DocLine>,
    links: Vec<PageLink>,
    link_rows: Vec<u16>,
    card_rows: Vec<u16>,
    section_bounds: Vec<(SectionId, u16, u16)>,
    next_card: usize,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            links: Vec::new(),
            link_rows: Vec::new(),
            card_rows: Vec::new(),
            section_bounds: Vec::new(),
            next_card: 0,
        }
    }

    fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    fn blank(&mut self) {
        self.lines.push(DocLine::Blank);
    }

    fn heading(&mut self, id: SectionId) {
        self.lines.push(DocLine::SectionTitle(id));
        self.lines.push(DocLine::Rule);
        self.blank();
    }

    fn text(&mut self, text: &'static str) {
        self.lines.push(DocLine::Text(text));
    }

    fn card(&mut self, title: &'static str, summary: &'static str) {
        let card = self.next_card;
        self.next_card += 1;
        self.card_rows.push(self.row());
        self.lines.push(DocLine::CardTitle { card, text: title });
        self.lines.push(DocLine::CardBody { card, text: summary });
        self.blank();
    }

    fn link(&mut self, label: &'static str, action: LinkAction) {
        self.link_rows.push(self.row());
        self.lines.push(DocLine::Link(self.links.len()));
        self.links.push(PageLink { label, action });
    }

    fn section(&mut self, id: SectionId, body: impl FnOnce(&mut Self)) {
        let top = self.row();
        self.heading(id);
        body(self);
        self.blank();
        let height = self.row() - top;
        self.section_bounds.push((id, top, height));
    }

    fn finish(self) -> Document {
        Document {
            lines: self.lines,
            links: self.links,
            link_rows: self.link_rows,
            card_rows: self.card_rows,
            section_bounds: self.section_bounds,
        }
    }
}

fn build_document() -> Document {
    let mut b = DocumentBuilder::new();

    b.section(SectionId::Home, |b| {
        b.text("نخلة — منتجات سعودية أصيلة");
        b.text("من قلب الواحة إلى بيتك: تمور وعسل وقهوة بجودة تليق بضيوفك.");
        b.blank();
        b.link("تواصل معنا", LinkAction::Jump(SectionId::Contact));
        b.link("تعرف على خدماتنا", LinkAction::Jump(SectionId::Services));
    });

    b.section(SectionId::About, |b| {
        b.text("قيمنا التي نعمل بها كل يوم:");
        b.blank();
        b.card("الجودة", "نختار محاصيلنا يدوياً ونفحص كل دفعة قبل تغليفها.");
        b.card("الأصالة", "وصفات وطرق حفظ توارثناها عبر ثلاثة أجيال.");
        b.card("الاستدامة", "زراعة موفرة للمياه وتغليف قابل لإعادة التدوير.");
    });

    b.section(SectionId::Products, |b| {
        b.card("تمور سكري فاخرة", "تمور مختارة من مزارع القصيم، تعبئة فاخرة للهدايا.");
        b.card("عسل السدر الجبلي", "عسل طبيعي مفحوص مخبرياً من مناحل الجنوب.");
        b.card("قهوة عربية بالهيل", "خلطة محمصة طازجة مع هيل مطحون على الطريقة النجدية.");
    });

    b.section(SectionId::Services, |b| {
        b.card("التوريد بالجملة", "أسعار تفضيلية للفنادق والمقاهي مع عقود مرنة.");
        b.card("التغليف المخصص", "علب بشعار عميلك لهدايا الشركات والمناسبات.");
        b.card("التوصيل السريع", "توصيل مبرد خلال 48 ساعة لجميع مناطق المملكة.");
    });

    b.section(SectionId::Portfolio, |b| {
        b.card("ضيافة موسم الرياض", "تجهيز أجنحة الضيافة بأكثر من 50 ألف عبوة تمور.");
        b.card("هدايا مؤتمر التقنية", "ثلاثة آلاف علبة مخصصة سلمت خلال أسبوع واحد.");
        b.card("ركن القهوة السعودية", "تشغيل أركان قهوة في معارض وفعاليات وطنية.");
    });

    b.section(SectionId::Blog, |b| {
        b.card("كيف تختار تمورك؟", "دليل مختصر للتمييز بين أصناف التمور ودرجات جودتها.");
        b.link("اقرأ المزيد: كيف تختار تمورك؟", LinkAction::BlogTeaser);
        b.blank();
        b.card("قصة عسل السدر", "رحلة العسل من شجرة السدر إلى المختبر ثم إلى مائدتك.");
        b.link("اقرأ المزيد: قصة عسل السدر", LinkAction::BlogTeaser);
        b.blank();
        b.card("طقوس القهوة العربية", "ماذا يعني الفنجان الأول؟ عادات الضيافة في نجد والحجاز.");
        b.link("اقرأ المزيد: طقوس القهوة العربية", LinkAction::BlogTeaser);
    });

    b.section(SectionId::Contact, |b| {
        b.text("يسعدنا تواصلك، فريقنا يرد خلال يوم عمل واحد.");
        b.blank();
        b.lines.push(DocLine::ContactInfo(SITE_ADDRESS));
        b.lines.push(DocLine::ContactInfo(SITE_PHONE));
        b.lines.push(DocLine::ContactInfo(SITE_EMAIL));
        b.blank();
        b.link("فتح نموذج التواصل", LinkAction::OpenContactForm);
        b.link("نسخ البريد الإلكتروني", LinkAction::CopyEmail);
    });

    b.finish()
}
