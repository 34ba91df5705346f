//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 프로세스 전역 싱글톤을 `TypeId` 기준으로 보관하는 컨테이너입니다.
//! 리포지토리와 서비스는 `inventory`로 등록된 생성자를 통해 첫 사용 시점에 생성되고,
//! 데이터베이스 핸들처럼 외부에서 만든 인프라 컴포넌트는 [`ServiceLocator::set`]으로 직접 등록합니다.
//!
//! ## 등록
//!
//! ```rust,ignore
//! use std::any::Any;
//! use std::sync::Arc;
//! use crate::core::registry::{RepositoryRegistration, ServiceLocator};
//!
//! fn build_comment_repository() -> Arc<dyn Any + Send + Sync> {
//!     Arc::new(CommentRepository::new(/* ... */))
//! }
//!
//! inventory::submit! {
//!     RepositoryRegistration {
//!         name: "comment_repository",
//!         constructor: build_comment_repository,
//!     }
//! }
//! ```
//!
//! ## 조회
//!
//! 타입 이름의 접미사(`Repository`/`Service`)를 떼어낸 엔티티 이름으로 등록 정보를 찾습니다.
//!
//! ```text
//! CommentRepository → "comment" → comment_repository
//! TheaterService    → "theater" → theater_service
//! ```
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ inventory::submit! → 전역 레지스트리에 생성자 수집
//!
//! 2. 런타임 초기화
//!    ├─ main: ServiceLocator::set(Arc<Database>)
//!    └─ ServiceLocator::initialize_all() → 리포지토리, 서비스 순서로 미리 생성
//!
//! 3. 요청 처리
//!    └─ ServiceLocator::get::<T>() → 캐시된 Arc<T> 반환
//! ```
//!
//! 생성자는 락 밖에서 실행되므로 생성자 안에서 다른 컴포넌트를 `get`해도 교착되지 않습니다.
//! 같은 스레드에서 생성 중인 타입을 다시 요청하면 순환 참조로 판단해 패닉합니다.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 컴포넌트 생성자
///
/// 반환되는 `Arc`는 구체 타입 `T`를 감싸고 있어야 합니다.
pub type Constructor = fn() -> Arc<dyn Any + Send + Sync>;

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// `{entity}_service` 형태의 고유 이름
    pub name: &'static str,
    pub constructor: Constructor,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// `{entity}_repository` 형태의 고유 이름
    pub name: &'static str,
    pub constructor: Constructor,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 엔티티 이름 → 서비스 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 엔티티 이름 → 리포지토리 등록 정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> =
    Lazy::new(|| {
        let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
            .map(|registration| (extract_clean_name_static(registration.name), registration))
            .collect();

        print_cache_initialized("Repository", cache.len());
        cache
    });

thread_local! {
    /// 현재 스레드에서 생성 중인 타입들 (순환 참조 감지용)
    static INITIALIZING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

/// 등록 이름에서 접미사를 제거합니다.
///
/// `comment_repository` → `comment`, `theater_service` → `theater`
fn extract_clean_name_static(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 생성 중 표시를 유지하고, 스코프를 벗어나면 (패닉 포함) 해제합니다.
struct InitializingGuard {
    type_id: TypeId,
}

impl InitializingGuard {
    fn enter(type_id: TypeId, type_name: &str) -> Self {
        let first_entry = INITIALIZING.with(|set| set.borrow_mut().insert(type_id));

        if !first_entry {
            log::error!("❌ Circular dependency detected for type: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        Self { type_id }
    }
}

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        INITIALIZING.with(|set| {
            set.borrow_mut().remove(&self.type_id);
        });
    }
}

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    /// 생성된 인스턴스 캐시 (타입당 하나)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 캐시에 있으면 바로 반환
    /// 2. 없으면 타입 이름으로 등록 정보를 찾아 생성 (락 밖에서)
    /// 3. 생성된 인스턴스를 캐시에 저장. 다른 스레드가 먼저 저장했다면 그 인스턴스를 반환
    ///
    /// # Panics
    ///
    /// - 등록되지 않은 타입을 요청한 경우
    /// - 생성자가 다른 타입을 반환한 경우
    /// - 순환 참조가 있는 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.cached(type_id) {
            return Self::downcast(instance, type_name);
        }

        let instance = {
            let _guard = InitializingGuard::enter(type_id, type_name);
            let constructed = Self::construct(type_name);

            if (*constructed).type_id() != type_id {
                panic!("Type mismatch in ServiceLocator: constructor for {} returned another type", type_name);
            }

            LOCATOR.store(type_id, constructed)
        };

        log::debug!("📦 Created: {}", Self::extract_clean_type_name(type_name));
        Self::downcast(instance, type_name)
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 같은 타입이 이미 있으면 교체합니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저, 서비스를 나중에 생성합니다.
    /// 인프라 컴포넌트(`Database`)는 이 호출 전에 `set`되어 있어야 합니다.
    pub fn initialize_all() {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repositories: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        if !repositories.is_empty() {
            print_step_start(1, "Creating Repository instances");

            for registration in &repositories {
                LOCATOR.warm(registration.name, registration.constructor);
            }

            print_step_complete(1, "Repository instances created", repositories.len());
        }

        let services: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        if !services.is_empty() {
            print_step_start(2, "Creating Service instances");

            for registration in &services {
                LOCATOR.warm(registration.name, registration.constructor);
            }

            print_step_complete(2, "Service instances created", services.len());
        }

        print_final_summary(repositories.len(), services.len());
    }

    fn cached(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    /// 먼저 저장된 인스턴스를 우선합니다.
    fn store(
        &self,
        type_id: TypeId,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> Arc<dyn Any + Send + Sync> {
        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert(instance)
            .clone()
    }

    fn warm(&self, name: &str, constructor: Constructor) {
        let instance = constructor();
        let type_id = (*instance).type_id();

        if self.cached(type_id).is_some() {
            print_sub_task(name, "✓ Already created");
            return;
        }

        self.store(type_id, instance);
        print_sub_task(name, "✓ Created");
    }

    /// 타입 이름으로 등록 정보를 찾아 생성자를 호출합니다.
    fn construct(type_name: &str) -> Arc<dyn Any + Send + Sync> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        if let Some(entity_name) = clean_type_name.strip_suffix("Repository") {
            let entity_name = entity_name.to_lowercase();

            return match REPOSITORY_NAME_CACHE.get(&entity_name) {
                Some(registration) => (registration.constructor)(),
                None => panic!("No repository found for entity: {}", entity_name),
            };
        }

        if let Some(entity_name) = clean_type_name.strip_suffix("Service") {
            let entity_name = entity_name.to_lowercase();

            return match SERVICE_NAME_CACHE.get(&entity_name) {
                Some(registration) => (registration.constructor)(),
                None => panic!("No service found for entity: {}", entity_name),
            };
        }

        panic!(
            "Component not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
            type_name
        );
    }

    fn downcast<T: 'static + Send + Sync>(
        instance: Arc<dyn Any + Send + Sync>,
        type_name: &str,
    ) -> Arc<T> {
        match instance.downcast::<T>() {
            Ok(instance) => instance,
            Err(_) => panic!("Type mismatch in ServiceLocator: {}", type_name),
        }
    }

    /// `std::any::type_name`의 모듈 경로를 제거합니다.
    ///
    /// `mflix_api::services::comments::comment_service::CommentService` → `CommentService`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
