//! In-memory ports for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use travel_common::SessionTokenService;
use travel_core::traits::{
    AdminRepository, BlogRepository, ContactMessageRepository, DestinationRepository,
    EmployeeRepository, ImageStore, PartnerRepository, SessionStore,
};
use travel_core::{
    Admin, Blog, BlogAuthor, ContactMessage, Destination, DomainError, Employee, ImageCategory,
    MessagePriority, MessageStatus, Partner, RepoResult, SessionRecord, SessionRole, Snowflake,
    SnowflakeGenerator,
};

use super::context::ServiceContext;
use crate::dto::ImageUpload;

pub(crate) const SECRET: &str = "test-secret-key-that-is-long-enough";

/// Smallest byte string the PNG sniffer accepts
pub(crate) fn png() -> ImageUpload {
    ImageUpload::new(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0])
        .with_content_type("image/png")
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap()
}

fn write_guard(flag: &AtomicBool) -> RepoResult<()> {
    if flag.load(Ordering::SeqCst) {
        Err(DomainError::WriteFailed("simulated write failure".into()))
    } else {
        Ok(())
    }
}

// ============================================================================
// Images
// ============================================================================

#[derive(Default)]
pub(crate) struct FakeImages {
    counter: AtomicUsize,
    saved: Mutex<Vec<String>>,
    removed: Mutex<Vec<String>>,
    pub fail_saves: AtomicBool,
}

impl FakeImages {
    pub fn saved(&self) -> Vec<String> {
        lock(&self.saved).clone()
    }

    pub fn removed(&self) -> Vec<String> {
        lock(&self.removed).clone()
    }
}

#[async_trait]
impl ImageStore for FakeImages {
    async fn save(&self, category: ImageCategory, extension: &str, _: &[u8]) -> RepoResult<String> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError("disk full".into()));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let path = category.relative_path(&format!("file{n}.{extension}"));
        lock(&self.saved).push(path.clone());
        Ok(path)
    }

    async fn remove(&self, path: &str) -> RepoResult<()> {
        lock(&self.removed).push(path.to_string());
        Ok(())
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Default)]
pub(crate) struct FakeSessions {
    records: Mutex<HashMap<String, SessionRecord>>,
}

impl FakeSessions {
    pub fn get_sync(&self, id: &str) -> Option<SessionRecord> {
        lock(&self.records).get(id).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }
}

#[async_trait]
impl SessionStore for FakeSessions {
    async fn save(&self, record: &SessionRecord) -> RepoResult<()> {
        lock(&self.records).insert(record.session_id.clone(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &SessionRecord) -> RepoResult<bool> {
        let mut records = lock(&self.records);
        match records.get_mut(&record.session_id) {
            Some(current) if !current.is_expired() => {
                *current = record.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn get(&self, session_id: &str) -> RepoResult<Option<SessionRecord>> {
        Ok(self.get_sync(session_id).filter(|r| !r.is_expired()))
    }

    async fn delete(&self, session_id: &str) -> RepoResult<()> {
        lock(&self.records).remove(session_id);
        Ok(())
    }

    async fn delete_for_principal(&self, role: SessionRole, id: Snowflake) -> RepoResult<u64> {
        let mut records = lock(&self.records);
        let before = records.len();
        records.retain(|_, r| !(r.role == role && r.principal_id == id));
        Ok((before - records.len()) as u64)
    }
}

// ============================================================================
// Repositories
// ============================================================================

#[derive(Default)]
pub(crate) struct FakeAdmins {
    rows: Mutex<HashMap<Snowflake, (Admin, String)>>,
}

#[async_trait]
impl AdminRepository for FakeAdmins {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Admin>> {
        Ok(lock(&self.rows).get(&id).map(|(a, _)| a.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        Ok(lock(&self.rows)
            .values()
            .find(|(a, _)| a.email.eq_ignore_ascii_case(email))
            .map(|(a, _)| a.clone()))
    }

    async fn create(&self, admin: &Admin, password_hash: &str) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        if rows.values().any(|(a, _)| a.email.eq_ignore_ascii_case(&admin.email)) {
            return Err(DomainError::EmailAlreadyExists);
        }
        rows.insert(admin.id, (admin.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(lock(&self.rows).get(&id).map(|(_, h)| h.clone()))
    }
}

pub(crate) struct FakeBlogs {
    rows: Mutex<HashMap<Snowflake, Blog>>,
    admins: Arc<FakeAdmins>,
    pub fail_writes: AtomicBool,
}

impl FakeBlogs {
    fn new(admins: Arc<FakeAdmins>) -> Self {
        Self {
            rows: Mutex::default(),
            admins,
            fail_writes: AtomicBool::new(false),
        }
    }

    fn check_author(&self, blog: &Blog) -> RepoResult<()> {
        match blog.author_id {
            Some(id) if !lock(&self.admins.rows).contains_key(&id) => Err(
                DomainError::WriteFailed("blogs_author_id_fkey violated".into()),
            ),
            _ => Ok(()),
        }
    }

    fn project(&self, mut blog: Blog) -> Blog {
        blog.author = blog.author_id.and_then(|id| {
            lock(&self.admins.rows).get(&id).map(|(a, _)| BlogAuthor {
                id: a.id,
                name: a.name.clone(),
                email: a.email.clone(),
            })
        });
        blog
    }
}

#[async_trait]
impl BlogRepository for FakeBlogs {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        let blog = lock(&self.rows).get(&id).cloned();
        Ok(blog.map(|b| self.project(b)))
    }

    async fn find_all(&self) -> RepoResult<Vec<Blog>> {
        let mut all: Vec<Blog> = lock(&self.rows).values().cloned().collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all.into_iter().map(|b| self.project(b)).collect())
    }

    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        write_guard(&self.fail_writes)?;
        self.check_author(blog)?;
        lock(&self.rows).insert(blog.id, blog.clone());
        Ok(())
    }

    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        write_guard(&self.fail_writes)?;
        self.check_author(blog)?;
        let mut rows = lock(&self.rows);
        let row = rows.get_mut(&blog.id).ok_or(DomainError::BlogNotFound(blog.id))?;
        *row = blog.clone();
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lock(&self.rows)
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::BlogNotFound(id))
    }
}

#[derive(Default)]
pub(crate) struct FakeDestinations {
    rows: Mutex<HashMap<Snowflake, Destination>>,
    pub fail_writes: AtomicBool,
}

impl FakeDestinations {
    pub fn get_sync(&self, id: Snowflake) -> Option<Destination> {
        lock(&self.rows).get(&id).cloned()
    }
}

#[async_trait]
impl DestinationRepository for FakeDestinations {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Destination>> {
        Ok(self.get_sync(id))
    }

    async fn find_all(&self) -> RepoResult<Vec<Destination>> {
        let mut all: Vec<_> = lock(&self.rows).values().cloned().collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }

    async fn find_active(&self) -> RepoResult<Vec<Destination>> {
        let all = self.find_all().await?;
        Ok(all.into_iter().filter(|d| d.is_active).collect())
    }

    async fn create(&self, destination: &Destination) -> RepoResult<()> {
        write_guard(&self.fail_writes)?;
        lock(&self.rows).insert(destination.id, destination.clone());
        Ok(())
    }

    async fn update(&self, destination: &Destination) -> RepoResult<()> {
        write_guard(&self.fail_writes)?;
        let mut rows = lock(&self.rows);
        let row = rows
            .get_mut(&destination.id)
            .ok_or(DomainError::DestinationNotFound(destination.id))?;
        *row = destination.clone();
        Ok(())
    }

    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        let row = rows.get_mut(&id).ok_or(DomainError::DestinationNotFound(id))?;
        row.set_active(active);
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lock(&self.rows)
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::DestinationNotFound(id))
    }
}

#[derive(Default)]
pub(crate) struct FakePartners {
    rows: Mutex<HashMap<Snowflake, Partner>>,
}

impl FakePartners {
    fn check_unique(rows: &HashMap<Snowflake, Partner>, p: &Partner) -> RepoResult<()> {
        for other in rows.values().filter(|o| o.id != p.id) {
            if other.email.eq_ignore_ascii_case(&p.email) {
                return Err(DomainError::EmailAlreadyExists);
            }
            if other.phone == p.phone {
                return Err(DomainError::PhoneAlreadyExists);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PartnerRepository for FakePartners {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Partner>> {
        Ok(lock(&self.rows).get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Partner>> {
        Ok(lock(&self.rows).values().cloned().collect())
    }

    async fn create(&self, partner: &Partner) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        Self::check_unique(&rows, partner)?;
        rows.insert(partner.id, partner.clone());
        Ok(())
    }

    async fn update(&self, partner: &Partner) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        Self::check_unique(&rows, partner)?;
        let row = rows
            .get_mut(&partner.id)
            .ok_or(DomainError::PartnerNotFound(partner.id))?;
        *row = partner.clone();
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lock(&self.rows)
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PartnerNotFound(id))
    }
}

#[derive(Default)]
pub(crate) struct FakeEmployees {
    rows: Mutex<HashMap<Snowflake, (Employee, String)>>,
}

#[async_trait]
impl EmployeeRepository for FakeEmployees {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Employee>> {
        Ok(lock(&self.rows).get(&id).map(|(e, _)| e.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        Ok(lock(&self.rows)
            .values()
            .find(|(e, _)| e.email.eq_ignore_ascii_case(email))
            .map(|(e, _)| e.clone()))
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(lock(&self.rows).values().map(|(e, _)| e.clone()).collect())
    }

    async fn create(&self, employee: &Employee, password_hash: &str) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        if rows.values().any(|(e, _)| e.email.eq_ignore_ascii_case(&employee.email)) {
            return Err(DomainError::EmailAlreadyExists);
        }
        rows.insert(employee.id, (employee.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        let row = rows
            .get_mut(&employee.id)
            .ok_or(DomainError::EmployeeNotFound(employee.id))?;
        row.0 = employee.clone();
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(lock(&self.rows).get(&id).map(|(_, h)| h.clone()))
    }

    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        let row = rows.get_mut(&id).ok_or(DomainError::EmployeeNotFound(id))?;
        row.1 = password_hash.to_string();
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lock(&self.rows)
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::EmployeeNotFound(id))
    }
}

#[derive(Default)]
pub(crate) struct FakeContactMessages {
    rows: Mutex<HashMap<Snowflake, ContactMessage>>,
}

#[async_trait]
impl ContactMessageRepository for FakeContactMessages {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ContactMessage>> {
        Ok(lock(&self.rows).get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<ContactMessage>> {
        let mut all: Vec<_> = lock(&self.rows).values().cloned().collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }

    async fn create(&self, message: &ContactMessage) -> RepoResult<()> {
        lock(&self.rows).insert(message.id, message.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: Snowflake,
        status: MessageStatus,
        priority: MessagePriority,
    ) -> RepoResult<()> {
        let mut rows = lock(&self.rows);
        let row = rows.get_mut(&id).ok_or(DomainError::ContactMessageNotFound(id))?;
        row.status = status;
        row.priority = priority;
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        lock(&self.rows)
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::ContactMessageNotFound(id))
    }
}

// ============================================================================
// Wiring
// ============================================================================

/// Every fake port, kept around so tests can inspect them after the call
pub(crate) struct Fakes {
    pub admins: Arc<FakeAdmins>,
    pub blogs: Arc<FakeBlogs>,
    pub destinations: Arc<FakeDestinations>,
    pub partners: Arc<FakePartners>,
    pub employees: Arc<FakeEmployees>,
    pub messages: Arc<FakeContactMessages>,
    pub sessions: Arc<FakeSessions>,
    pub images: Arc<FakeImages>,
}

impl Fakes {
    pub fn new() -> Self {
        let admins = Arc::new(FakeAdmins::default());
        Self {
            blogs: Arc::new(FakeBlogs::new(admins.clone())),
            admins,
            destinations: Arc::default(),
            partners: Arc::default(),
            employees: Arc::default(),
            messages: Arc::default(),
            sessions: Arc::default(),
            images: Arc::default(),
        }
    }

    pub fn context(&self) -> ServiceContext {
        self.context_with_ttl(3600)
    }

    pub fn context_with_ttl(&self, ttl_secs: i64) -> ServiceContext {
        ServiceContext::builder()
            .blog_repo(self.blogs.clone())
            .destination_repo(self.destinations.clone())
            .partner_repo(self.partners.clone())
            .employee_repo(self.employees.clone())
            .admin_repo(self.admins.clone())
            .contact_message_repo(self.messages.clone())
            .session_store(self.sessions.clone())
            .image_store(self.images.clone())
            .token_service(Arc::new(SessionTokenService::new(SECRET, ttl_secs)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .build()
            .unwrap()
    }
}
